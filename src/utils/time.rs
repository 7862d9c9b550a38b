//! Time utilities: parsing HH:MM and shift durations.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Hours from `start` to `end`, wrapping past midnight when `end < start`.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut mins = minutes_between(start, end);
    if end < start {
        mins += 24 * 60;
    }
    mins as f64 / 60.0
}

/// Accepts "" (no time) or a valid HH:MM; anything else is rejected.
pub fn is_valid_optional_time(t: &str) -> bool {
    t.trim().is_empty() || parse_time(t).is_some()
}
