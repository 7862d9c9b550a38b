use crate::config::Config;
use crate::core::calculator::rotation::{ProjectionReport, ProjectionWindow};
use crate::core::logic::Core;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_state, save_calendar};
use crate::errors::AppResult;

/// Rotation projection against the persisted calendar.
pub struct ApplyLogic;

impl ApplyLogic {
    /// Project the active rotation over the configured window and persist
    /// the filled gaps. Existing days are never touched.
    pub fn apply(pool: &mut DbPool, cfg: &Config) -> AppResult<ProjectionReport> {
        let mut state = load_state(&pool.conn)?;
        let window = ProjectionWindow::current(cfg.projection_radius);

        let report = Core::project(&mut state, window);

        if report.filled > 0 {
            save_calendar(&mut pool.conn, &state.calendar_data)?;
            ttlog_quiet(
                &pool.conn,
                "apply",
                &format!("{}:{}", window.first_year, window.last_year),
                &format!(
                    "Rotation projected: {} days filled, {} kept",
                    report.filled, report.kept
                ),
            );
        }

        Ok(report)
    }
}
