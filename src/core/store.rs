//! Record store: bulk load and per-entry save of work entries.
//!
//! `EntryStore` is the persistence boundary. `RecordStore` wraps a backend
//! and applies the failure policy: read failures are logged and treated as
//! an empty list, write failures are logged and reported as
//! `SaveOutcome::Failed` so the caller can carry on.

use crate::db::log::log_entry;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_entries, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::filter::EntryFilter;
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::error;

/// Persistence boundary for work entries.
pub trait EntryStore {
    /// Fetch entries in storage-native order, optionally filtered.
    fn fetch(&mut self, filter: Option<&EntryFilter>) -> AppResult<Vec<WorkEntry>>;

    /// Persist the current field values of one entry.
    fn save(&mut self, entry: &WorkEntry) -> AppResult<()>;
}

/// SQLite-backed store.
pub struct SqliteEntryStore {
    pool: DbPool,
}

impl SqliteEntryStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new entry. Not part of the editing screen; used by `add`.
    pub fn insert(&mut self, entry: &WorkEntry) -> AppResult<i64> {
        let id = insert_entry(&self.pool.conn, entry)?;
        log_entry(&self.pool.conn, "add", &WorkEntry { id, ..entry.clone() });
        Ok(id)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl EntryStore for SqliteEntryStore {
    fn fetch(&mut self, filter: Option<&EntryFilter>) -> AppResult<Vec<WorkEntry>> {
        load_entries(&self.pool.conn, filter)
    }

    fn save(&mut self, entry: &WorkEntry) -> AppResult<()> {
        update_entry(&self.pool.conn, entry)?;
        log_entry(&self.pool.conn, "edit", entry);
        Ok(())
    }
}

/// In-process store. Ids are assigned on insert; reads and writes can be
/// made to fail to exercise the error policy.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: Vec<WorkEntry>,
    next_id: i64,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryEntryStore {
    pub fn new(entries: Vec<WorkEntry>) -> Self {
        let mut store = Self::default();
        for e in entries {
            store.insert(e);
        }
        store
    }

    pub fn insert(&mut self, mut entry: WorkEntry) -> i64 {
        self.next_id += 1;
        entry.id = self.next_id;
        self.entries.push(entry);
        self.next_id
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }
}

impl EntryStore for MemoryEntryStore {
    fn fetch(&mut self, filter: Option<&EntryFilter>) -> AppResult<Vec<WorkEntry>> {
        if self.fail_reads {
            return Err(AppError::StorageRead("store unavailable".into()));
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| filter.is_none_or(|f| f.matches(e)))
            .cloned()
            .collect())
    }

    fn save(&mut self, entry: &WorkEntry) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::StorageWrite("store is read-only".into()));
        }
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| AppError::StorageWrite(format!("no work entry with id {}", entry.id)))?;
        *slot = entry.clone();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
}

/// Applies the load/save failure policy on top of a backend.
pub struct RecordStore<S: EntryStore> {
    backend: S,
    saves: usize,
}

impl<S: EntryStore> RecordStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend, saves: 0 }
    }

    /// Load every entry. A read failure is logged and yields an empty list.
    pub fn load_all(&mut self) -> Vec<WorkEntry> {
        self.load_filtered(None)
    }

    pub fn load_filtered(&mut self, filter: Option<&EntryFilter>) -> Vec<WorkEntry> {
        match self.backend.fetch(filter) {
            Ok(entries) => entries,
            Err(e) => {
                error(storage_read_error(e));
                Vec::new()
            }
        }
    }

    /// Persist one entry. A write failure is logged and reported, never raised.
    pub fn save(&mut self, entry: &WorkEntry) -> SaveOutcome {
        self.saves += 1;
        match self.backend.save(entry) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                error(storage_write_error(e));
                SaveOutcome::Failed
            }
        }
    }

    /// Number of saves issued through this store.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

fn storage_read_error(e: AppError) -> AppError {
    match e {
        AppError::StorageRead(_) => e,
        other => AppError::StorageRead(other.to_string()),
    }
}

fn storage_write_error(e: AppError) -> AppError {
    match e {
        AppError::StorageWrite(_) => e,
        other => AppError::StorageWrite(other.to_string()),
    }
}
