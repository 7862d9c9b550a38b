use crate::cli::commands::{load_view, use_color};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::views::{CalendarFilter, CalendarView};
use crate::errors::{AppError, AppResult};
use crate::utils::date::current_year;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        year,
        month,
        filter,
    } = cmd
    {
        let year = year.unwrap_or_else(current_year);
        let months: Vec<u32> = match month {
            Some(m) if (1..=12).contains(m) => vec![*m],
            Some(m) => return Err(AppError::InvalidMonth(*m)),
            None => (1..=12).collect(),
        };

        let (state, holidays) = load_view(cfg, year)?;
        let view = CalendarView {
            calendar: &state.calendar_data,
            shifts: &state.shifts,
            holidays: &holidays,
            use_color: use_color(),
        };
        let filter = filter.as_deref().map(CalendarFilter::parse);

        for m in months {
            println!("{}", view.render_month(year, m, filter.as_ref()));
        }
    }
    Ok(())
}
