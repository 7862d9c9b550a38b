use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Apply) {
        let mut pool = DbPool::new(&cfg.database)?;
        let report = ApplyLogic::apply(&mut pool, cfg)?;

        if report.staged == 0 {
            info("Nothing to project (no usable rotation).");
        } else {
            success(format!(
                "Rotation applied: {} days filled, {} already assigned",
                report.filled, report.kept
            ));
        }
    }
    Ok(())
}
