use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::shift::find_shift;
use crate::models::state::PlannerState;
use crate::utils::date::{all_days_of_year, iso, weekday_short};
use crate::utils::formatting::hours2readable;
use csv::Writer;
use std::path::Path;

/// Write one row per day of `year`: assignment, hours and holiday.
pub fn write_year_csv(
    path: &Path,
    state: &PlannerState,
    year: i32,
    show_weekday: bool,
) -> AppResult<usize> {
    let holidays = Core::holidays_for(state, year);
    let mut wtr = Writer::from_path(path)?;

    let mut header = vec!["date"];
    if show_weekday {
        header.push("weekday");
    }
    header.extend(["shift_id", "shift_name", "hours", "holiday"]);
    wtr.write_record(&header)?;

    let mut rows = 0;
    for date in all_days_of_year(year) {
        let key = iso(date);
        let shift_id = state
            .calendar_data
            .get(&key)
            .and_then(|d| d.shift_id.clone())
            .unwrap_or_default();
        let shift = find_shift(&state.shifts, &shift_id);

        let mut record = vec![key.clone()];
        if show_weekday {
            record.push(weekday_short(date).to_string());
        }
        record.push(shift_id.clone());
        record.push(shift.map(|s| s.name.clone()).unwrap_or_default());
        record.push(
            shift
                .map(|s| hours2readable(s.duration_hours(), false))
                .unwrap_or_default(),
        );
        record.push(holidays.get(&key).cloned().unwrap_or_default());

        wtr.write_record(&record)?;
        rows += 1;
    }

    wtr.flush()?;
    Ok(rows)
}
