use super::work_entry::WorkEntry;
use chrono::NaiveDate;

/// Optional predicate applied when fetching entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub office: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl EntryFilter {
    pub fn is_empty(&self) -> bool {
        self.office.is_none() && self.from.is_none() && self.to.is_none()
    }

    /// Entries without a date never match a date range.
    pub fn matches(&self, entry: &WorkEntry) -> bool {
        if let Some(office) = &self.office
            && entry.office.as_deref() != Some(office.as_str())
        {
            return false;
        }

        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        match entry.date {
            Some(d) => {
                self.from.is_none_or(|from| d >= from) && self.to.is_none_or(|to| d <= to)
            }
            None => false,
        }
    }
}
