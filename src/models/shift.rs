use crate::utils::time::{hours_between, parse_time};
use serde::{Deserialize, Serialize};

/// A user-defined shift type. Calendar entries reference it by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

impl Shift {
    pub fn new(id: &str, name: &str, color: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    /// Worked hours for one day of this shift.
    ///
    /// Empty or unparseable times yield 0. An end earlier than the start is
    /// read as crossing midnight (22:00 → 06:00 = 8h).
    pub fn duration_hours(&self) -> f64 {
        match (parse_time(&self.start_time), parse_time(&self.end_time)) {
            (Some(start), Some(end)) => hours_between(start, end),
            _ => 0.0,
        }
    }

    pub fn has_times(&self) -> bool {
        !self.start_time.trim().is_empty() && !self.end_time.trim().is_empty()
    }

    /// "06:00-14:00", or "--:--" for shifts without times.
    pub fn time_range(&self) -> String {
        if self.has_times() {
            format!("{}-{}", self.start_time, self.end_time)
        } else {
            "--:--".to_string()
        }
    }
}

/// Palette offered for new shifts.
pub const COLORS: [&str; 17] = [
    "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e", "#10b981", "#14b8a6",
    "#06b6d4", "#0ea5e9", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899",
    "#f43f5e",
];

/// Catalog seeded by `init` on an empty database.
pub fn default_catalog() -> Vec<Shift> {
    vec![
        Shift::new("M", "Mañana", COLORS[0], "06:00", "14:00"),
        Shift::new("T", "Tarde", COLORS[4], "14:00", "22:00"),
        Shift::new("N", "Noche", COLORS[10], "22:00", "06:00"),
        Shift::new("L", "Libre", COLORS[5], "", ""),
    ]
}

/// Lookup helper over a catalog slice.
pub fn find_shift<'a>(shifts: &'a [Shift], id: &str) -> Option<&'a Shift> {
    shifts.iter().find(|s| s.id == id)
}

/// Shift ids are short user codes; whitespace would break the CLI listing.
pub fn is_valid_shift_id(id: &str) -> bool {
    !id.is_empty() && !id.chars().any(char::is_whitespace)
}
