pub mod apply;
pub mod calendar;
pub mod config;
pub mod day;
pub mod duplicate;
pub mod export;
pub mod holiday;
pub mod import;
pub mod init;
pub mod log;
pub mod rotation;
pub mod shift;
pub mod stats;
pub mod target;
pub mod year;

use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_state;
use crate::errors::AppResult;
use crate::models::holiday::HolidayMap;
use crate::models::state::PlannerState;
use crate::ui::messages::colors_enabled;
use std::io::IsTerminal;

/// State and resolved holidays for a read-only view of `year`.
pub(crate) fn load_view(cfg: &Config, year: i32) -> AppResult<(PlannerState, HolidayMap)> {
    let pool = DbPool::new(&cfg.database)?;
    let state = load_state(&pool.conn)?;
    let holidays = Core::holidays_for(&state, year);
    Ok((state, holidays))
}

/// Colour rendered views only when writing to a terminal.
pub(crate) fn use_color() -> bool {
    colors_enabled() && std::io::stdout().is_terminal()
}
