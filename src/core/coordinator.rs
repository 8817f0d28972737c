//! Edit coordinator: applies picker results to the loaded entries,
//! persists them and refreshes the affected row.

use crate::core::picker::{PickerRequest, PickerResult, PickerValue};
use crate::core::presenter::{ListPresenter, RowSink};
use crate::core::store::{EntryStore, RecordStore, SaveOutcome};
use crate::errors::AppResult;
use crate::models::field::EntryField;
use crate::models::filter::EntryFilter;
use crate::models::work_entry::WorkEntry;

pub struct EditCoordinator<S: EntryStore, V: RowSink> {
    store: RecordStore<S>,
    presenter: ListPresenter<V>,
}

impl<S: EntryStore, V: RowSink> EditCoordinator<S, V> {
    pub fn new(store: RecordStore<S>, presenter: ListPresenter<V>) -> Self {
        Self { store, presenter }
    }

    /// Load every entry and draw the list. Returns the row count.
    pub fn start(&mut self) -> AppResult<usize> {
        self.start_filtered(None)
    }

    pub fn start_filtered(&mut self, filter: Option<&EntryFilter>) -> AppResult<usize> {
        let entries = self.store.load_filtered(filter);
        self.presenter.load(entries)?;
        Ok(self.presenter.row_count())
    }

    pub fn tap(&self, row: usize, field: EntryField) -> AppResult<PickerRequest> {
        self.presenter.tap(row, field)
    }

    /// Write the picked value into its row, save it, redraw that row only.
    ///
    /// Values are not validated (a clock-out before the clock-in is stored
    /// as given). A failed save still leaves the edit in memory and the row
    /// redrawn; the outcome tells the caller what happened.
    pub fn apply(&mut self, result: PickerResult) -> AppResult<SaveOutcome> {
        let row = result.row;
        let entry = self.presenter.entry_mut(row)?;
        set_field(entry, result.value);

        let outcome = self.store.save(entry);
        self.presenter.refresh_row(row)?;
        Ok(outcome)
    }

    pub fn presenter(&self) -> &ListPresenter<V> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut ListPresenter<V> {
        &mut self.presenter
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<S> {
        &mut self.store
    }
}

fn set_field(entry: &mut WorkEntry, value: PickerValue) {
    match value {
        PickerValue::Office(office) => entry.office = Some(office),
        PickerValue::Date(d) => entry.date = Some(d),
        PickerValue::TimeIn(t) => entry.time_in = Some(t),
        PickerValue::TimeOut(t) => entry.time_out = Some(t),
    }
}
