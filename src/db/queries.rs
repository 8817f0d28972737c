use crate::errors::{AppError, AppResult};
use crate::models::filter::EntryFilter;
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::warning;
use crate::utils::{date, time};
use rusqlite::{Connection, Result, Row, params};

/// Decode a stored text column. A value that does not parse is dropped
/// (the entry then renders blank) instead of failing the whole fetch.
fn decode<T>(
    id: i64,
    column: &str,
    raw: Option<String>,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = raw?;
    let value = parse(&raw);
    if value.is_none() {
        warning(format!(
            "Entry {id}: unreadable {column} '{raw}', field left empty"
        ));
    }
    value
}

pub fn map_row(row: &Row) -> Result<WorkEntry> {
    let id: i64 = row.get("id")?;

    Ok(WorkEntry {
        id,
        office: row.get("office")?,
        date: decode(id, "date", row.get("date")?, date::parse_date),
        time_in: decode(id, "time_in", row.get("time_in")?, time::parse_time),
        time_out: decode(id, "time_out", row.get("time_out")?, time::parse_time),
        created_at: row.get("created_at")?,
    })
}

/// Load entries in storage order (ascending id), optionally filtered.
pub fn load_entries(conn: &Connection, filter: Option<&EntryFilter>) -> AppResult<Vec<WorkEntry>> {
    let mut sql = String::from(
        "SELECT id, office, date, time_in, time_out, created_at FROM work_entries",
    );
    let mut clauses: Vec<&str> = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if let Some(f) = filter {
        if let Some(office) = &f.office {
            clauses.push("office = ?");
            args.push(office.clone());
        }
        if let Some(from) = f.from {
            clauses.push("date >= ?");
            args.push(from.format("%Y-%m-%d").to_string());
        }
        if let Some(to) = f.to {
            clauses.push("date <= ?");
            args.push(to.format("%Y-%m-%d").to_string());
        }
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new entry and return its storage id.
pub fn insert_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_entries (office, date, time_in, time_out, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.office,
            entry.date_str(),
            entry.time_in_str(),
            entry.time_out_str(),
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Write back every displayed field of an existing entry.
pub fn update_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE work_entries
         SET office = ?1, date = ?2, time_in = ?3, time_out = ?4
         WHERE id = ?5",
        params![
            entry.office,
            entry.date_str(),
            entry.time_in_str(),
            entry.time_out_str(),
            entry.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::StorageWrite(format!(
            "no work entry with id {}",
            entry.id
        )));
    }
    Ok(())
}
