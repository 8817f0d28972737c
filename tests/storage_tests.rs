use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;
use rworklog::core::log::{LogLogic, strip_ansi};
use rworklog::core::store::{MemoryEntryStore, RecordStore, SaveOutcome, SqliteEntryStore};
use rworklog::db::log::{log_entry, ttlog};
use rworklog::db::migrate::run_pending_migrations;
use rworklog::db::pool::DbPool;
use rworklog::db::queries::{insert_entry, load_entries, update_entry};
use rworklog::errors::AppError;
use rworklog::models::work_entry::WorkEntry;

fn sample() -> Vec<WorkEntry> {
    vec![
        WorkEntry::new(Some("Bronx".into()), NaiveDate::from_ymd_opt(2025, 9, 1), None, None),
        WorkEntry::new(Some("212A".into()), None, None, None),
    ]
}

fn count_log(conn: &Connection, operation: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = ?1",
        [operation],
        |r| r.get(0),
    )
    .unwrap()
}

#[test]
fn test_migrations_are_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    run_pending_migrations(&conn).unwrap();
    run_pending_migrations(&conn).unwrap();

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'work_entries'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
    assert_eq!(count_log(&conn, "migration_applied"), 1);
}

#[test]
fn test_insert_then_update_keeps_storage_order() {
    let pool = DbPool::in_memory().unwrap();
    let mut first = WorkEntry::new(Some("Bronx".into()), None, None, None);
    first.id = insert_entry(&pool.conn, &first).unwrap();
    let second = WorkEntry::new(Some("212A".into()), None, None, None);
    insert_entry(&pool.conn, &second).unwrap();

    first.time_in = NaiveTime::from_hms_opt(8, 45, 0);
    update_entry(&pool.conn, &first).unwrap();

    let all = load_entries(&pool.conn, None).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].office.as_deref(), Some("Bronx"));
    assert_eq!(all[0].time_in, NaiveTime::from_hms_opt(8, 45, 0));
    assert_eq!(all[1].office.as_deref(), Some("212A"));
}

#[test]
fn test_update_of_missing_row_is_a_write_error() {
    let pool = DbPool::in_memory().unwrap();
    let ghost = WorkEntry {
        id: 42,
        ..Default::default()
    };
    assert!(matches!(
        update_entry(&pool.conn, &ghost),
        Err(AppError::StorageWrite(_))
    ));
}

#[test]
fn test_unreadable_value_blanks_only_its_own_field() {
    let pool = DbPool::in_memory().unwrap();
    let good = WorkEntry::new(
        Some("Bronx".into()),
        NaiveDate::from_ymd_opt(2025, 9, 1),
        NaiveTime::from_hms_opt(9, 0, 0),
        NaiveTime::from_hms_opt(17, 0, 0),
    );
    insert_entry(&pool.conn, &good).unwrap();
    // time() stores seconds; '9am' is not a time at all
    pool.conn
        .execute(
            "INSERT INTO work_entries (office, date, time_in, time_out, created_at)
             VALUES ('212A', '2025-09-02', time('09:00'), '9am', 'x')",
            [],
        )
        .unwrap();

    let mut store = RecordStore::new(SqliteEntryStore::from_pool(pool));
    let all = store.load_all();

    assert_eq!(all.len(), 2);
    assert!(all[0].is_complete());
    assert_eq!(all[1].office.as_deref(), Some("212A"));
    assert_eq!(all[1].time_in, NaiveTime::from_hms_opt(9, 0, 0));
    assert_eq!(all[1].time_out, None);
    assert!(!all[1].is_complete());
}

#[test]
fn test_read_failure_yields_empty_list() {
    let mut backend = MemoryEntryStore::new(sample());
    backend.fail_reads = true;
    let mut store = RecordStore::new(backend);
    assert!(store.load_all().is_empty());
}

#[test]
fn test_write_failure_is_reported_not_raised() {
    let mut store = RecordStore::new(MemoryEntryStore::new(sample()));
    let mut entry = store.load_all().remove(0);
    entry.office = Some("PalmerRd".into());

    store.backend_mut().fail_writes = true;
    assert_eq!(store.save(&entry), SaveOutcome::Failed);
    assert_eq!(store.backend().entries()[0].office.as_deref(), Some("Bronx"));

    store.backend_mut().fail_writes = false;
    assert_eq!(store.save(&entry), SaveOutcome::Saved);
    assert_eq!(store.backend().entries()[0].office.as_deref(), Some("PalmerRd"));
    assert_eq!(store.save_count(), 2);
}

#[test]
fn test_sqlite_store_saves_and_logs() {
    let mut backend = SqliteEntryStore::from_pool(DbPool::in_memory().unwrap());
    let id = backend.insert(&sample()[0]).unwrap();

    let mut store = RecordStore::new(backend);
    let mut entry = store.load_all().remove(0);
    assert_eq!(entry.id, id);
    entry.office = Some("308B".into());
    assert_eq!(store.save(&entry), SaveOutcome::Saved);

    let reloaded = store.load_all();
    assert_eq!(reloaded[0].office.as_deref(), Some("308B"));

    let conn = &store.backend().pool().conn;
    assert_eq!(count_log(conn, "add"), 1);
    assert_eq!(count_log(conn, "edit"), 1);
}

#[test]
fn test_entry_log_line_names_the_entry_and_its_fields() {
    let pool = DbPool::in_memory().unwrap();
    let mut entry = sample().remove(0);
    entry.id = 7;
    log_entry(&pool.conn, "edit", &entry);

    let (target, message): (String, String) = pool
        .conn
        .query_row(
            "SELECT target, message FROM log WHERE operation = 'edit'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(target, "entry 7");
    assert_eq!(message, "office=Bronx date=2025-09-01 in=- out=-");
}

#[test]
fn test_log_print_renders_operations_with_targets() {
    let pool = DbPool::in_memory().unwrap();
    ttlog(&pool.conn, "edit", "entry 3", "office=Bronx").unwrap();

    let lines = LogLogic::render(&pool).unwrap();
    let last = strip_ansi(lines.last().unwrap());
    assert!(last.contains("edit (entry 3)"));
    assert!(last.ends_with("=> office=Bronx"));
}
