use shiftplan::core::calculator::duplicate::duplicate_previous_year;
use shiftplan::core::calculator::stats::{aggregate_schedule, unknown_shift_ids};
use shiftplan::models::day::{CalendarMap, DayAssignment};
use shiftplan::models::shift::{Shift, default_catalog};

fn calendar(entries: &[(&str, Option<&str>)]) -> CalendarMap {
    entries
        .iter()
        .map(|(k, id)| {
            let day = match id {
                Some(id) => DayAssignment::shift(id),
                None => DayAssignment::none(),
            };
            (k.to_string(), day)
        })
        .collect()
}

#[test]
fn test_overnight_shift_counts_eight_hours() {
    let night = Shift::new("N", "Noche", "#3b82f6", "22:00", "06:00");
    assert_eq!(night.duration_hours(), 8.0);

    let cal = calendar(&[("2024-03-10", Some("N"))]);
    let stats = aggregate_schedule(2024, &cal, &[night]);
    assert_eq!(stats.annual.total_hours, 8.0);
    assert_eq!(stats.per_month[2].total_hours, 8.0);
}

#[test]
fn test_shift_without_times_has_zero_hours() {
    let free = Shift::new("L", "Libre", "#22c55e", "", "");
    assert_eq!(free.duration_hours(), 0.0);

    let half = Shift::new("H", "Half", "#22c55e", "08:00", "");
    assert_eq!(half.duration_hours(), 0.0);
}

#[test]
fn test_monthly_and_annual_counts() {
    let cal = calendar(&[
        ("2024-01-01", Some("M")),
        ("2024-01-02", Some("M")),
        ("2024-01-03", Some("T")),
        ("2024-02-01", Some("N")),
        ("2024-02-02", Some("L")),
        ("2024-12-31", Some("M")),
    ]);
    let stats = aggregate_schedule(2024, &cal, &default_catalog());

    assert_eq!(stats.year, 2024);
    assert_eq!(stats.per_month[0].count("M"), 2);
    assert_eq!(stats.per_month[0].count("T"), 1);
    assert_eq!(stats.per_month[0].total_hours, 24.0);
    assert_eq!(stats.per_month[1].count("N"), 1);
    assert_eq!(stats.per_month[1].count("L"), 1);
    assert_eq!(stats.per_month[1].total_hours, 8.0);
    assert_eq!(stats.per_month[11].count("M"), 1);

    assert_eq!(stats.annual.count("M"), 3);
    assert_eq!(stats.annual.assigned_days(), 6);
    assert_eq!(stats.annual.total_hours, 48.0);
}

#[test]
fn test_annual_total_is_sum_of_months() {
    let mut cal = CalendarMap::new();
    for m in 1..=12u32 {
        for d in [1u32, 9, 17, 25] {
            let id = ["M", "T", "N", "L"][(d as usize + m as usize) % 4];
            cal.insert(format!("2025-{m:02}-{d:02}"), DayAssignment::shift(id));
        }
    }
    let stats = aggregate_schedule(2025, &cal, &default_catalog());

    let monthly: f64 = stats.per_month.iter().map(|p| p.total_hours).sum();
    assert_eq!(stats.annual.total_hours, monthly);

    for id in ["M", "T", "N", "L"] {
        let monthly: u32 = stats.per_month.iter().map(|p| p.count(id)).sum();
        assert_eq!(stats.annual.count(id), monthly);
    }
    assert_eq!(stats.annual.assigned_days(), 48);
}

#[test]
fn test_catalog_ids_are_seeded_with_zero() {
    let stats = aggregate_schedule(2024, &CalendarMap::new(), &default_catalog());

    for month in &stats.per_month {
        assert_eq!(month.counts.len(), 4);
        assert!(month.counts.values().all(|c| *c == 0));
        assert_eq!(month.total_hours, 0.0);
    }
    assert_eq!(stats.annual.total_hours, 0.0);
}

#[test]
fn test_other_years_bad_keys_and_blank_days_are_ignored() {
    let cal = calendar(&[
        ("2023-12-31", Some("M")),
        ("2025-01-01", Some("M")),
        ("not-a-date", Some("M")),
        ("2024-02-30", Some("M")),
        ("2024-05-05", None),
        ("2024-05-06", Some("T")),
    ]);
    let stats = aggregate_schedule(2024, &cal, &default_catalog());

    assert_eq!(stats.annual.assigned_days(), 1);
    assert_eq!(stats.annual.count("T"), 1);
    assert_eq!(stats.annual.total_hours, 8.0);
}

#[test]
fn test_unknown_ids_counted_without_hours() {
    let cal = calendar(&[("2024-04-01", Some("X")), ("2024-04-02", Some("M"))]);
    let stats = aggregate_schedule(2024, &cal, &default_catalog());

    assert_eq!(stats.per_month[3].count("X"), 1);
    assert_eq!(stats.annual.count("X"), 1);
    assert_eq!(stats.annual.total_hours, 8.0);
    assert_eq!(unknown_shift_ids(&stats.annual, &default_catalog()), vec!["X"]);
}

#[test]
fn test_hour_difference_against_target() {
    let mut cal = CalendarMap::new();
    for d in 1..=10u32 {
        cal.insert(format!("2024-06-{d:02}"), DayAssignment::shift("M"));
    }
    let stats = aggregate_schedule(2024, &cal, &default_catalog());

    assert_eq!(stats.hour_difference(1680.0), 80.0 - 1680.0);
    assert_eq!(stats.hour_difference(40.0), 40.0);
    assert_eq!(stats.hour_difference(80.0), 0.0);
}

#[test]
fn test_duplicate_previous_year_overwrites_target_year() {
    let mut cal = calendar(&[
        ("2024-01-01", Some("M")),
        ("2024-01-02", None),
        ("2025-01-01", Some("N")),
        ("2025-03-03", Some("T")),
    ]);
    let copied = duplicate_previous_year(&mut cal, 2025);

    assert_eq!(copied, 2);
    assert_eq!(cal["2025-01-01"], DayAssignment::shift("M"));
    assert_eq!(cal["2025-01-02"], DayAssignment::none());
    assert_eq!(cal["2025-03-03"], DayAssignment::shift("T"));
    assert_eq!(cal["2024-01-01"], DayAssignment::shift("M"));
}

#[test]
fn test_duplicate_skips_feb_29_into_non_leap_year() {
    let mut cal = calendar(&[("2024-02-28", Some("M")), ("2024-02-29", Some("T"))]);
    let copied = duplicate_previous_year(&mut cal, 2025);

    assert_eq!(copied, 1);
    assert!(cal.contains_key("2025-02-28"));
    assert!(!cal.keys().any(|k| k.starts_with("2025-03-01")));
    assert_eq!(cal.len(), 3);
}

#[test]
fn test_duplicate_into_lowest_year_is_noop() {
    let mut cal = calendar(&[("2024-01-01", Some("M"))]);
    assert_eq!(duplicate_previous_year(&mut cal, i32::MIN), 0);
    assert_eq!(cal.len(), 1);
}
