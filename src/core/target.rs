use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_target, save_target};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::hours2readable;

pub struct TargetLogic;

impl TargetLogic {
    pub fn show(pool: &mut DbPool) -> AppResult<f64> {
        let hours = load_target(&pool.conn)?;
        info(format!("Target annual hours: {}", hours2readable(hours, false)));
        Ok(hours)
    }

    pub fn set(pool: &mut DbPool, hours: f64) -> AppResult<()> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::Config(format!("invalid target hours: {}", hours)));
        }
        save_target(&pool.conn, hours)?;
        ttlog_quiet(&pool.conn, "target", "", &format!("Target set to {}", hours));
        success(format!("Target annual hours set to {}", hours2readable(hours, false)));
        Ok(())
    }
}
