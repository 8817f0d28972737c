//! Internal operation log (`log` table).

use crate::errors::AppResult;
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Log an operation on one work entry: target `entry <id>`, message with
/// the stored field values (`-` for an empty field).
///
/// Best effort. The entry itself is already written, so a failure here
/// only produces a warning.
pub fn log_entry(conn: &Connection, operation: &str, entry: &WorkEntry) {
    let message = format!(
        "office={} date={} in={} out={}",
        entry.office.as_deref().unwrap_or("-"),
        entry.date_str().unwrap_or_else(|| "-".into()),
        entry.time_in_str().unwrap_or_else(|| "-".into()),
        entry.time_out_str().unwrap_or_else(|| "-".into()),
    );

    if let Err(e) = ttlog(conn, operation, &format!("entry {}", entry.id), &message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
