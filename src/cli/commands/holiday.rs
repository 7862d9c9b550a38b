use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::core::holiday::HolidayLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::current_year;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holiday { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            HolidayAction::List { year } => {
                HolidayLogic::list(&mut pool, year.unwrap_or_else(current_year))?
            }
            HolidayAction::Add { date, name } => HolidayLogic::add(&mut pool, date, name)?,
            HolidayAction::Del { date } => HolidayLogic::delete(&mut pool, date)?,
            HolidayAction::Disable { date } => HolidayLogic::set_disabled(&mut pool, date, true)?,
            HolidayAction::Enable { date } => HolidayLogic::set_disabled(&mut pool, date, false)?,
        }
    }
    Ok(())
}
