use crate::core::calculator::holidays::resolve_holidays;
use crate::core::calculator::rotation::{ProjectionReport, ProjectionWindow, apply_rotation};
use crate::core::calculator::stats::aggregate_schedule;
use crate::models::holiday::HolidayMap;
use crate::models::state::PlannerState;
use crate::models::stats::ScheduleStats;

/// Engine entry points over a whole [`PlannerState`].
pub struct Core;

impl Core {
    pub fn holidays_for(state: &PlannerState, year: i32) -> HolidayMap {
        resolve_holidays(
            year,
            &state.custom_holidays,
            &state.disabled_national_holidays,
        )
    }

    pub fn year_stats(state: &PlannerState, year: i32) -> ScheduleStats {
        aggregate_schedule(year, &state.calendar_data, &state.shifts)
    }

    /// Fill calendar gaps from the active rotation.
    pub fn project(state: &mut PlannerState, window: ProjectionWindow) -> ProjectionReport {
        apply_rotation(
            state.rotation.as_ref(),
            &state.shifts,
            &mut state.calendar_data,
            window,
        )
    }
}
