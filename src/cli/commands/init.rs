use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::seed_default_shifts;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - the default shift catalog when the catalog is empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing shiftplan…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let pool = DbPool::new(&cfg.database)?;

    let seeded = seed_default_shifts(&pool.conn)?;
    if seeded > 0 {
        success(format!("Default shift catalog created ({} shifts)", seeded));
    }

    ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    );

    success("shiftplan initialization completed!");
    Ok(())
}
