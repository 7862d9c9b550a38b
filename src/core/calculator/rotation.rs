//! Projection of the active rotation onto the calendar.
//!
//! The calendar map stays the single source of truth: projection only
//! fills dates that have no entry yet.

use crate::models::day::{CalendarMap, DayAssignment};
use crate::models::rotation::Rotation;
use crate::models::shift::{Shift, find_shift};
use crate::utils::date::{all_days_of_year, current_year, iso};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Largest number of years projected on each side of the centre year.
pub const MAX_PROJECTION_RADIUS: u32 = 50;

/// Inclusive range of whole years the projector walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionWindow {
    pub first_year: i32,
    pub last_year: i32,
}

impl ProjectionWindow {
    pub fn new(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year,
        }
    }

    /// `[year - radius, year + radius]`, radius capped at [`MAX_PROJECTION_RADIUS`].
    pub fn around(year: i32, radius: u32) -> Self {
        let r = radius.min(MAX_PROJECTION_RADIUS) as i32;
        Self::new(year.saturating_sub(r), year.saturating_add(r))
    }

    /// Window centred on the current local year.
    pub fn current(radius: u32) -> Self {
        Self::around(current_year(), radius)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        (self.first_year..=self.last_year).flat_map(all_days_of_year)
    }
}

/// Outcome of an in-place projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionReport {
    /// Dates the rotation produced a known shift for.
    pub staged: usize,
    /// Staged dates written because the calendar had no entry.
    pub filled: usize,
    /// Staged dates left alone because the calendar already had one.
    pub kept: usize,
}

/// Shift id the rotation assigns to `date`, ignoring the catalog.
///
/// `None` before the start date or when the rotation cannot be projected.
pub fn shift_for_date(rotation: &Rotation, date: NaiveDate) -> Option<&str> {
    let start = rotation.start()?;
    if rotation.sequence.is_empty() || date < start {
        return None;
    }

    let offset = (date - start).num_days();
    let index = offset.rem_euclid(rotation.sequence.len() as i64) as usize;
    rotation.sequence.get(index).map(String::as_str)
}

/// Assignments the rotation would produce over `window`.
///
/// Sequence entries naming shifts missing from `shifts` produce nothing for
/// their dates.
pub fn stage_rotation(
    rotation: &Rotation,
    shifts: &[Shift],
    window: ProjectionWindow,
) -> CalendarMap {
    let mut staged = CalendarMap::new();
    if !rotation.is_projectable() {
        debug!(rotation = %rotation.name, "rotation not projectable, skipping");
        return staged;
    }

    for date in window.dates() {
        if let Some(id) = shift_for_date(rotation, date)
            && find_shift(shifts, id).is_some()
        {
            staged.insert(iso(date), DayAssignment::shift(id));
        }
    }

    staged
}

/// Calendar with the rotation projected into its gaps.
///
/// Existing entries, explicit or previously projected, always win.
pub fn project_rotation(
    rotation: Option<&Rotation>,
    shifts: &[Shift],
    calendar: &CalendarMap,
    window: ProjectionWindow,
) -> CalendarMap {
    let mut out = calendar.clone();
    apply_rotation(rotation, shifts, &mut out, window);
    out
}

/// In-place variant of [`project_rotation`].
pub fn apply_rotation(
    rotation: Option<&Rotation>,
    shifts: &[Shift],
    calendar: &mut CalendarMap,
    window: ProjectionWindow,
) -> ProjectionReport {
    let Some(rotation) = rotation else {
        return ProjectionReport::default();
    };

    let staged = stage_rotation(rotation, shifts, window);
    let mut report = ProjectionReport {
        staged: staged.len(),
        ..Default::default()
    };

    for (date, assignment) in staged {
        if calendar.contains_key(&date) {
            report.kept += 1;
        } else {
            calendar.insert(date, assignment);
            report.filled += 1;
        }
    }

    info!(
        rotation = %rotation.name,
        first_year = window.first_year,
        last_year = window.last_year,
        staged = report.staged,
        filled = report.filled,
        kept = report.kept,
        "rotation projected"
    );

    report
}
