use crate::models::day::CalendarMap;
use crate::models::holiday::{CustomHolidays, DisabledHolidays};
use crate::models::rotation::Rotation;
use crate::models::shift::Shift;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_ANNUAL_HOURS: f64 = 1680.0;

/// Everything the planner persists.
///
/// Serialized as-is this is also the import/export document: exactly six
/// top-level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerState {
    pub shifts: Vec<Shift>,
    pub rotation: Option<Rotation>,
    pub calendar_data: CalendarMap,
    pub custom_holidays: CustomHolidays,
    pub disabled_national_holidays: DisabledHolidays,
    pub target_annual_hours: f64,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            shifts: Vec::new(),
            rotation: None,
            calendar_data: CalendarMap::new(),
            custom_holidays: CustomHolidays::new(),
            disabled_national_holidays: DisabledHolidays::new(),
            target_annual_hours: DEFAULT_TARGET_ANNUAL_HOURS,
        }
    }
}
