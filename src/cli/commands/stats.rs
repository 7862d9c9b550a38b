use crate::cli::commands::{load_view, use_color};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::views::render_stats;
use crate::errors::AppResult;
use crate::utils::date::current_year;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { year } = cmd {
        let year = year.unwrap_or_else(current_year);
        let (state, _) = load_view(cfg, year)?;

        let stats = Core::year_stats(&state, year);
        print!(
            "{}",
            render_stats(&stats, &state.shifts, state.target_annual_hours, use_color())
        );
    }
    Ok(())
}
