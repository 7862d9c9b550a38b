use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::target::TargetLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Target { hours } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        match hours {
            Some(h) => TargetLogic::set(&mut pool, *h)?,
            None => {
                TargetLogic::show(&mut pool)?;
            }
        }
    }
    Ok(())
}
