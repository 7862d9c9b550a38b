//! JSON backup document: export the whole planner state, import any subset.

use crate::errors::{AppError, AppResult};
use crate::models::day::CalendarMap;
use crate::models::holiday::{CustomHolidays, DisabledHolidays};
use crate::models::rotation::Rotation;
use crate::models::shift::Shift;
use crate::models::state::PlannerState;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

pub const FIELD_SHIFTS: &str = "shifts";
pub const FIELD_ROTATION: &str = "rotation";
pub const FIELD_CALENDAR: &str = "calendarData";
pub const FIELD_CUSTOM_HOLIDAYS: &str = "customHolidays";
pub const FIELD_DISABLED_HOLIDAYS: &str = "disabledNationalHolidays";
pub const FIELD_TARGET: &str = "targetAnnualHours";
const FIELD_LEGACY_ROTATIONS: &str = "rotations";

/// Which top-level fields an import touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl ImportReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Pretty-printed JSON with exactly the six persisted fields.
pub fn export_document(state: &PlannerState) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Merge a backup document into `state`.
///
/// Invalid JSON, or a document that is not an object, fails without touching
/// `state`. Otherwise each field is assigned on its own, only when present
/// and well-formed; malformed fields are reported as skipped. A `shifts`
/// array repeating an id counts as malformed.
pub fn import_document(text: &str, state: &mut PlannerState) -> AppResult<ImportReport> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| AppError::Import(format!("invalid JSON document: {e}")))?;
    let Value::Object(doc) = doc else {
        return Err(AppError::Import(
            "backup document must be a JSON object".to_string(),
        ));
    };

    let mut report = ImportReport::default();

    if let Some(shifts) = field::<Vec<Shift>>(&doc, FIELD_SHIFTS, &mut report) {
        match duplicate_shift_id(&shifts) {
            None => state.shifts = shifts,
            Some(id) => {
                warn!(field = FIELD_SHIFTS, id, "duplicate shift id, import field skipped");
                report.applied.retain(|f| *f != FIELD_SHIFTS);
                report.skipped.push(FIELD_SHIFTS);
            }
        }
    }

    if doc.contains_key(FIELD_ROTATION) {
        if let Some(rotation) = field::<Option<Rotation>>(&doc, FIELD_ROTATION, &mut report) {
            state.rotation = rotation;
        }
    } else if let Some(rotations) =
        field::<Vec<Rotation>>(&doc, FIELD_LEGACY_ROTATIONS, &mut report)
    {
        state.rotation = rotations.into_iter().next();
    }

    if let Some(calendar) = field::<CalendarMap>(&doc, FIELD_CALENDAR, &mut report) {
        state.calendar_data = calendar;
    }

    if let Some(custom) = field::<CustomHolidays>(&doc, FIELD_CUSTOM_HOLIDAYS, &mut report) {
        state.custom_holidays = custom;
    }

    if let Some(disabled) = field::<DisabledHolidays>(&doc, FIELD_DISABLED_HOLIDAYS, &mut report) {
        state.disabled_national_holidays = disabled;
    }

    if let Some(target) = field::<f64>(&doc, FIELD_TARGET, &mut report) {
        state.target_annual_hours = target;
    }

    Ok(report)
}

/// First id that appears twice in the catalog.
fn duplicate_shift_id(shifts: &[Shift]) -> Option<&str> {
    let mut seen = HashSet::new();
    shifts
        .iter()
        .map(|s| s.id.as_str())
        .find(|id| !seen.insert(*id))
}

fn field<T: DeserializeOwned>(
    doc: &Map<String, Value>,
    name: &'static str,
    report: &mut ImportReport,
) -> Option<T> {
    let raw = doc.get(name)?;
    match serde_json::from_value(raw.clone()) {
        Ok(v) => {
            report.applied.push(name);
            Some(v)
        }
        Err(e) => {
            warn!(field = name, error = %e, "import field skipped");
            report.skipped.push(name);
            None
        }
    }
}
