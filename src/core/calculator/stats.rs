//! Per-month and annual shift counts and worked hours.

use crate::models::day::CalendarMap;
use crate::models::shift::{Shift, find_shift};
use crate::models::stats::{PeriodStats, ScheduleStats};
use crate::utils::date::parse_date;
use chrono::Datelike;

/// Aggregate the assignments of `year`.
///
/// Keys that are not valid dates, or fall in other years, are skipped.
/// Every non-null shift id is counted; only known shifts with both times
/// contribute hours. Annual figures are the sum of the monthly buckets.
pub fn aggregate_schedule(year: i32, calendar: &CalendarMap, shifts: &[Shift]) -> ScheduleStats {
    let mut per_month: [PeriodStats; 12] = Default::default();
    for bucket in per_month.iter_mut() {
        seed_counts(bucket, shifts);
    }

    for (key, day) in calendar {
        let Some(date) = parse_date(key) else {
            continue;
        };
        if date.year() != year {
            continue;
        }
        let Some(shift_id) = &day.shift_id else {
            continue;
        };

        let bucket = &mut per_month[date.month0() as usize];
        *bucket.counts.entry(shift_id.clone()).or_insert(0) += 1;

        if let Some(shift) = find_shift(shifts, shift_id) {
            bucket.total_hours += shift.duration_hours();
        }
    }

    let mut annual = PeriodStats::default();
    seed_counts(&mut annual, shifts);
    for month in &per_month {
        for (id, count) in &month.counts {
            *annual.counts.entry(id.clone()).or_insert(0) += count;
        }
        annual.total_hours += month.total_hours;
    }

    ScheduleStats {
        year,
        per_month,
        annual,
    }
}

fn seed_counts(stats: &mut PeriodStats, shifts: &[Shift]) {
    for s in shifts {
        stats.counts.entry(s.id.clone()).or_insert(0);
    }
}

/// Ids counted in `stats` that are not in the catalog.
pub fn unknown_shift_ids<'a>(stats: &'a PeriodStats, shifts: &[Shift]) -> Vec<&'a str> {
    stats
        .counts
        .keys()
        .filter(|id| find_shift(shifts, id).is_none())
        .map(String::as_str)
        .collect()
}
