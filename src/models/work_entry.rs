use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One persisted attendance record.
///
/// All four fields are optional in storage; the list only shows a row
/// when every one of them is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    pub id: i64,                      // ⇔ work_entries.id (storage only, never a row reference)
    pub office: Option<String>,       // ⇔ work_entries.office
    pub date: Option<NaiveDate>,      // ⇔ work_entries.date (TEXT "YYYY-MM-DD")
    pub time_in: Option<NaiveTime>,   // ⇔ work_entries.time_in (TEXT "HH:MM")
    pub time_out: Option<NaiveTime>,  // ⇔ work_entries.time_out (TEXT "HH:MM")
    pub created_at: String,           // ⇔ work_entries.created_at (TEXT, ISO8601)
}

impl WorkEntry {
    /// Build a not-yet-stored entry (`id = 0`, `created_at = now`).
    pub fn new(
        office: Option<String>,
        date: Option<NaiveDate>,
        time_in: Option<NaiveTime>,
        time_out: Option<NaiveTime>,
    ) -> Self {
        Self {
            id: 0,
            office,
            date,
            time_in,
            time_out,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// True when every displayed field is present.
    pub fn is_complete(&self) -> bool {
        self.office.is_some()
            && self.date.is_some()
            && self.time_in.is_some()
            && self.time_out.is_some()
    }

    pub fn date_str(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn time_in_str(&self) -> Option<String> {
        self.time_in.map(|t| t.format("%H:%M").to_string())
    }

    pub fn time_out_str(&self) -> Option<String> {
        self.time_out.map(|t| t.format("%H:%M").to_string())
    }
}
