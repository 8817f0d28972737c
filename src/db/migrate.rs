use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_WORK_ENTRIES: &str = "20250301_0001_create_work_entries";

/// Ensure that the `log` table exists with the modern schema.
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

/// Check if the `work_entries` table exists.
fn work_entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='work_entries'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check whether a versioned migration was already recorded in `log`.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Create the `work_entries` table. Every displayed field is nullable:
/// entries may be stored incomplete and are shown blank until filled in.
fn create_work_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            office      TEXT,
            date        TEXT,
            time_in     TEXT,
            time_out    TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_entries_date ON work_entries(date);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `DbPool` on every open, so each step must be idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !work_entries_table_exists(conn)? {
        create_work_entries_table(conn)?;
        success("Created work_entries table.");
    }

    if !migration_applied(conn, CREATE_WORK_ENTRIES)? {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Created work_entries table')",
            [CREATE_WORK_ENTRIES],
        )?;
    }

    Ok(())
}
