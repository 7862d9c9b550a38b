use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::core::shift::{ShiftLogic, ShiftUpdate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::shift::Shift;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ShiftAction::Add {
                id,
                name,
                start,
                end,
                color,
            } => {
                let shift = Shift::new(
                    id,
                    name,
                    color.as_deref().unwrap_or(""),
                    start.as_deref().unwrap_or(""),
                    end.as_deref().unwrap_or(""),
                );
                ShiftLogic::add(&mut pool, cfg, shift)?;
            }
            ShiftAction::Edit {
                id,
                name,
                start,
                end,
                color,
            } => {
                let update = ShiftUpdate {
                    name: name.clone(),
                    color: color.clone(),
                    start: start.clone(),
                    end: end.clone(),
                };
                ShiftLogic::edit(&mut pool, cfg, id, update)?;
            }
            ShiftAction::Del { id } => ShiftLogic::delete(&mut pool, id)?,
            ShiftAction::List => ShiftLogic::list(&mut pool)?,
        }
    }
    Ok(())
}
