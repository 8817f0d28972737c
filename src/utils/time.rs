//! Time utilities: parsing HH:MM[:SS] and the short display style.

use chrono::{Local, NaiveTime, Timelike};

/// Accepts `HH:MM` and `HH:MM:SS` (the form SQLite's `time()` writes).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Short time style, e.g. "9:05 AM".
pub fn format_short(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// Current local time truncated to the minute.
pub fn now_minute() -> NaiveTime {
    let now = Local::now().time();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}
