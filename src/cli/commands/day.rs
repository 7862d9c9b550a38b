use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day::DayLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        date,
        shift,
        none,
        clear,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *clear {
            DayLogic::clear(&mut pool, date)?;
        } else if *none {
            DayLogic::set(&mut pool, date, None)?;
        } else if let Some(id) = shift {
            DayLogic::set(&mut pool, date, Some(id))?;
        } else {
            return Err(AppError::MissingArgument(
                "shift id (or use --none / --clear)".to_string(),
            ));
        }
    }
    Ok(())
}
