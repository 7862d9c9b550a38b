use crate::cli::commands::{load_view, use_color};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::views::CalendarView;
use crate::errors::AppResult;
use crate::utils::date::current_year;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Year { year } = cmd {
        let year = year.unwrap_or_else(current_year);
        let (state, holidays) = load_view(cfg, year)?;

        let view = CalendarView {
            calendar: &state.calendar_data,
            shifts: &state.shifts,
            holidays: &holidays,
            use_color: use_color(),
        };
        print!("{}", view.render_year(year));
    }
    Ok(())
}
