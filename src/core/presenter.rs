//! List presenter: one row per loaded entry, taps resolved to picker requests.

use crate::core::picker::{PickerRequest, PickerValue};
use crate::errors::{AppError, AppResult};
use crate::models::field::EntryField;
use crate::models::work_entry::WorkEntry;
use crate::utils::{date, time};

/// Display cells of one row. A blank row has every cell empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowView {
    pub office: String,
    pub date: String,
    pub time_in: String,
    pub time_out: String,
}

impl RowView {
    /// Incomplete entries render blank, never partially.
    pub fn from_entry(entry: &WorkEntry) -> Self {
        match (&entry.office, entry.date, entry.time_in, entry.time_out) {
            (Some(office), Some(d), Some(t_in), Some(t_out)) => Self {
                office: office.clone(),
                date: date::format_medium(d),
                time_in: time::format_short(t_in),
                time_out: time::format_short(t_out),
            },
            _ => Self::default(),
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    pub fn cell(&self, field: EntryField) -> &str {
        match field {
            EntryField::Office => &self.office,
            EntryField::Date => &self.date,
            EntryField::TimeIn => &self.time_in,
            EntryField::TimeOut => &self.time_out,
        }
    }
}

/// Presentation boundary: the row container the presenter fills and refreshes.
pub trait RowSink {
    /// Replace the whole list.
    fn reload_all(&mut self, rows: &[RowView]) -> AppResult<()>;

    /// Redraw a single row in place.
    fn reload_row(&mut self, index: usize, row: &RowView) -> AppResult<()>;
}

pub struct ListPresenter<V: RowSink> {
    entries: Vec<WorkEntry>,
    office_candidates: Vec<String>,
    sink: V,
}

impl<V: RowSink> ListPresenter<V> {
    pub fn new(sink: V, office_candidates: Vec<String>) -> Self {
        Self {
            entries: Vec::new(),
            office_candidates,
            sink,
        }
    }

    /// Bind a freshly loaded list and draw it.
    pub fn load(&mut self, entries: Vec<WorkEntry>) -> AppResult<()> {
        self.entries = entries;
        self.reload_all()
    }

    pub fn reload_all(&mut self) -> AppResult<()> {
        let rows: Vec<RowView> = self.entries.iter().map(RowView::from_entry).collect();
        self.sink.reload_all(&rows)
    }

    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    pub fn render_row(&self, index: usize) -> AppResult<RowView> {
        self.entry(index).map(RowView::from_entry)
    }

    /// Tappable cells of every row. Bindings carry no row index; the row is
    /// supplied when the tap happens (see `tap`).
    pub fn field_bindings(&self) -> [EntryField; 4] {
        EntryField::ALL
    }

    /// Resolve a tap on `(row, field)` against the list as it is now.
    pub fn tap(&self, row: usize, field: EntryField) -> AppResult<PickerRequest> {
        let entry = self.entry(row)?;

        let preset = match field {
            EntryField::Office => entry.office.clone().map(PickerValue::Office),
            EntryField::Date => entry.date.map(PickerValue::Date),
            EntryField::TimeIn => entry.time_in.map(PickerValue::TimeIn),
            EntryField::TimeOut => entry.time_out.map(PickerValue::TimeOut),
        };

        let mut request = PickerRequest::new(row, field).with_preset(preset);
        if field == EntryField::Office {
            request = request.with_candidates(self.office_candidates.clone());
        }
        Ok(request)
    }

    /// Redraw only `index`.
    pub fn refresh_row(&mut self, index: usize) -> AppResult<()> {
        let row = self.render_row(index)?;
        self.sink.reload_row(index, &row)
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> AppResult<&WorkEntry> {
        self.entries.get(index).ok_or(AppError::InvalidRow(index))
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> AppResult<&mut WorkEntry> {
        self.entries.get_mut(index).ok_or(AppError::InvalidRow(index))
    }

    pub fn sink(&self) -> &V {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut V {
        &mut self.sink
    }
}

/// Sink that records what was drawn. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub full_reloads: usize,
    pub row_reloads: Vec<usize>,
    pub rows: Vec<RowView>,
}

impl RowSink for RecordingSink {
    fn reload_all(&mut self, rows: &[RowView]) -> AppResult<()> {
        self.full_reloads += 1;
        self.rows = rows.to_vec();
        Ok(())
    }

    fn reload_row(&mut self, index: usize, row: &RowView) -> AppResult<()> {
        self.row_reloads.push(index);
        if let Some(slot) = self.rows.get_mut(index) {
            *slot = row.clone();
        }
        Ok(())
    }
}
