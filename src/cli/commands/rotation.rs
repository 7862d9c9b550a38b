use crate::cli::parser::{Commands, RotationAction};
use crate::config::Config;
use crate::core::rotation::RotationLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rotation { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            RotationAction::Set {
                start,
                name,
                sequence,
            } => RotationLogic::set(&mut pool, cfg, name, sequence.clone(), start)?,
            RotationAction::Show => RotationLogic::show(&mut pool)?,
            RotationAction::Clear => RotationLogic::clear(&mut pool)?,
        }
    }
    Ok(())
}
