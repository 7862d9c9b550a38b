use crate::db::migrate::run_pending_migrations;
use crate::db::queries::{insert_shift, load_shifts};
use crate::errors::AppResult;
use crate::models::shift::default_catalog;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Seed the default shift catalog when the catalog is empty.
/// Returns how many shifts were inserted.
pub fn seed_default_shifts(conn: &Connection) -> AppResult<usize> {
    if !load_shifts(conn)?.is_empty() {
        return Ok(0);
    }

    let defaults = default_catalog();
    for shift in &defaults {
        insert_shift(conn, shift)?;
    }
    Ok(defaults.len())
}
