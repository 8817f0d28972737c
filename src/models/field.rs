use serde::Serialize;

/// The four tappable cells of a work-entry row.
/// Also selects the picker mode when a cell is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntryField {
    Office,
    Date,
    TimeIn,
    TimeOut,
}

impl EntryField {
    /// Fields in on-screen column order.
    pub const ALL: [EntryField; 4] = [
        EntryField::Office,
        EntryField::Date,
        EntryField::TimeIn,
        EntryField::TimeOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Office => "office",
            EntryField::Date => "date",
            EntryField::TimeIn => "in",
            EntryField::TimeOut => "out",
        }
    }

    /// Parse a field name typed by the user (case-insensitive).
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "office" | "o" => Some(EntryField::Office),
            "date" | "d" => Some(EntryField::Date),
            "in" | "timein" | "time_in" | "i" => Some(EntryField::TimeIn),
            "out" | "timeout" | "time_out" | "u" => Some(EntryField::TimeOut),
            _ => None,
        }
    }
}
