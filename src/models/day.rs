use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a single calendar day shows.
///
/// `shift_id == None` is an explicit "no shift" entry, which is not the same
/// as the date being absent from the calendar map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAssignment {
    #[serde(default)]
    pub shift_id: Option<String>,
}

impl DayAssignment {
    pub fn shift(id: &str) -> Self {
        Self {
            shift_id: Some(id.to_string()),
        }
    }

    pub fn none() -> Self {
        Self { shift_id: None }
    }
}

/// Calendar assignments keyed by ISO date string (`YYYY-MM-DD`).
///
/// Keys stay strings so that malformed dates from an import are kept
/// and skipped by readers instead of rejecting the whole map.
pub type CalendarMap = BTreeMap<String, DayAssignment>;
