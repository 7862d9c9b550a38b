use crate::models::day::CalendarMap;
use crate::utils::date::{iso, key_year, parse_date};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Copy every assignment of `year - 1` onto the same month/day of `year`.
///
/// Copied entries overwrite whatever `year` had on those dates. Feb 29 is
/// dropped when `year` is not a leap year. Returns the number of copied
/// entries.
pub fn duplicate_previous_year(calendar: &mut CalendarMap, year: i32) -> usize {
    let Some(source_year) = year.checked_sub(1) else {
        return 0;
    };

    let copies: Vec<(String, _)> = calendar
        .iter()
        .filter(|(key, _)| key_year(key) == Some(source_year))
        .filter_map(|(key, day)| {
            let date = parse_date(key)?;
            let target = NaiveDate::from_ymd_opt(year, date.month(), date.day())?;
            Some((iso(target), day.clone()))
        })
        .collect();

    let copied = copies.len();
    calendar.extend(copies);

    debug!(source_year, year, copied, "year duplicated");
    copied
}
