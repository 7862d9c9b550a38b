use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day::DayLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::DuplicateYear { year } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        DayLogic::duplicate_year(&mut pool, *year)?;
    }
    Ok(())
}
