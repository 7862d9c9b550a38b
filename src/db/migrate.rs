use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Base planner schema: catalog, rotation, calendar, holidays, settings.
fn migrate_create_planner_tables(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_planner_tables";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        BEGIN;

        CREATE TABLE IF NOT EXISTS shifts (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            color       TEXT NOT NULL DEFAULT '',
            start_time  TEXT NOT NULL DEFAULT '',
            end_time    TEXT NOT NULL DEFAULT '',
            position    INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS rotation (
            slot        INTEGER PRIMARY KEY CHECK(slot = 1),
            name        TEXT NOT NULL DEFAULT '',
            sequence    TEXT NOT NULL DEFAULT '[]',
            start_date  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS calendar (
            date        TEXT PRIMARY KEY,
            shift_id    TEXT
        );

        CREATE TABLE IF NOT EXISTS custom_holidays (
            date        TEXT PRIMARY KEY,
            name        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS disabled_holidays (
            date        TEXT PRIMARY KEY,
            disabled    INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS settings (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL
        );

        COMMIT;
        "#,
    )?;

    mark_applied(conn, version, "Created planner tables")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_planner_tables(conn)?;
    Ok(())
}
