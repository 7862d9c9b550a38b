use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A repeating cycle of shift ids anchored at a start date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sequence: Vec<String>,
    #[serde(default)]
    pub start_date: String,
}

impl Rotation {
    pub fn new(name: &str, sequence: Vec<String>, start_date: &str) -> Self {
        Self {
            name: name.to_string(),
            sequence,
            start_date: start_date.to_string(),
        }
    }

    /// Parsed anchor date, `None` when empty or malformed.
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    /// A rotation can only be projected with a valid start and at least one step.
    pub fn is_projectable(&self) -> bool {
        self.start().is_some() && !self.sequence.is_empty()
    }
}
