use chrono::NaiveDate;
use shiftplan::core::calculator::rotation::{
    MAX_PROJECTION_RADIUS, ProjectionWindow, apply_rotation, project_rotation, shift_for_date,
};
use shiftplan::models::day::{CalendarMap, DayAssignment};
use shiftplan::models::rotation::Rotation;
use shiftplan::models::shift::{Shift, default_catalog};

fn mtnl() -> Rotation {
    Rotation::new(
        "4x1",
        vec!["M".into(), "T".into(), "N".into(), "L".into()],
        "2024-01-01",
    )
}

fn window_2024() -> ProjectionWindow {
    ProjectionWindow::new(2024, 2024)
}

fn shift_at<'a>(cal: &'a CalendarMap, key: &str) -> Option<&'a str> {
    cal.get(key).and_then(|d| d.shift_id.as_deref())
}

#[test]
fn test_projection_follows_sequence() {
    let cal = project_rotation(
        Some(&mtnl()),
        &default_catalog(),
        &CalendarMap::new(),
        window_2024(),
    );

    assert_eq!(shift_at(&cal, "2024-01-01"), Some("M"));
    assert_eq!(shift_at(&cal, "2024-01-02"), Some("T"));
    assert_eq!(shift_at(&cal, "2024-01-03"), Some("N"));
    assert_eq!(shift_at(&cal, "2024-01-04"), Some("L"));
    assert_eq!(shift_at(&cal, "2024-01-05"), Some("M"));
    // leap day lands on offset 59 → index 3
    assert_eq!(shift_at(&cal, "2024-02-29"), Some("L"));
    assert_eq!(cal.len(), 366);
}

#[test]
fn test_dates_before_start_are_untouched() {
    let rotation = Rotation::new("r", vec!["M".into()], "2024-06-15");
    let cal = project_rotation(
        Some(&rotation),
        &default_catalog(),
        &CalendarMap::new(),
        window_2024(),
    );

    assert!(!cal.contains_key("2024-06-14"));
    assert!(cal.contains_key("2024-06-15"));
    assert!(!cal.keys().any(|k| k.as_str() < "2024-06-15"));
}

#[test]
fn test_projection_never_overwrites_existing_entries() {
    let mut existing = CalendarMap::new();
    existing.insert("2024-01-01".to_string(), DayAssignment::shift("N"));
    existing.insert("2024-01-02".to_string(), DayAssignment::none());

    let cal = project_rotation(Some(&mtnl()), &default_catalog(), &existing, window_2024());

    assert_eq!(shift_at(&cal, "2024-01-01"), Some("N"));
    assert_eq!(cal["2024-01-02"], DayAssignment::none());
    assert_eq!(shift_at(&cal, "2024-01-03"), Some("N"));
}

#[test]
fn test_projection_is_idempotent() {
    let shifts = default_catalog();
    let once = project_rotation(Some(&mtnl()), &shifts, &CalendarMap::new(), window_2024());
    let twice = project_rotation(Some(&mtnl()), &shifts, &once, window_2024());
    assert_eq!(once, twice);

    let mut cal = once.clone();
    let report = apply_rotation(Some(&mtnl()), &shifts, &mut cal, window_2024());
    assert_eq!(report.filled, 0);
    assert_eq!(report.kept, report.staged);
    assert_eq!(cal, once);
}

#[test]
fn test_unknown_shift_ids_are_skipped() {
    let rotation = Rotation::new("r", vec!["M".into(), "X".into()], "2024-01-01");
    let cal = project_rotation(
        Some(&rotation),
        &default_catalog(),
        &CalendarMap::new(),
        window_2024(),
    );

    assert_eq!(shift_at(&cal, "2024-01-01"), Some("M"));
    assert!(!cal.contains_key("2024-01-02"));
    assert_eq!(shift_at(&cal, "2024-01-03"), Some("M"));
}

#[test]
fn test_malformed_start_or_empty_sequence_is_noop() {
    let shifts = default_catalog();
    let mut existing = CalendarMap::new();
    existing.insert("2024-03-03".to_string(), DayAssignment::shift("T"));

    let bad_start = Rotation::new("r", vec!["M".into()], "2024-13-45");
    let empty_start = Rotation::new("r", vec!["M".into()], "");
    let empty_seq = Rotation::new("r", vec![], "2024-01-01");

    for r in [bad_start, empty_start, empty_seq] {
        let cal = project_rotation(Some(&r), &shifts, &existing, window_2024());
        assert_eq!(cal, existing);
    }

    let cal = project_rotation(None, &shifts, &existing, window_2024());
    assert_eq!(cal, existing);
}

#[test]
fn test_window_bounds_projection() {
    let rotation = Rotation::new("r", vec!["M".into()], "2020-01-01");
    let cal = project_rotation(
        Some(&rotation),
        &default_catalog(),
        &CalendarMap::new(),
        ProjectionWindow::around(2024, 1),
    );

    assert!(cal.contains_key("2023-01-01"));
    assert!(cal.contains_key("2025-12-31"));
    assert!(!cal.contains_key("2022-12-31"));
    assert!(!cal.contains_key("2026-01-01"));
    assert_eq!(cal.len(), 365 + 366 + 365);
}

#[test]
fn test_shift_for_date_lookup() {
    let rotation = mtnl();
    let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

    assert_eq!(shift_for_date(&rotation, d("2023-12-31")), None);
    assert_eq!(shift_for_date(&rotation, d("2024-01-01")), Some("M"));
    assert_eq!(shift_for_date(&rotation, d("2024-01-05")), Some("M"));
    // 2024 is a leap year: offset 366 → index 2
    assert_eq!(shift_for_date(&rotation, d("2025-01-01")), Some("N"));
}

#[test]
fn test_projection_uses_current_catalog() {
    let only_morning = vec![Shift::new("M", "Mañana", "#ef4444", "06:00", "14:00")];
    let cal = project_rotation(
        Some(&mtnl()),
        &only_morning,
        &CalendarMap::new(),
        window_2024(),
    );

    assert!(cal.values().all(|d| d.shift_id.as_deref() == Some("M")));
    assert_eq!(shift_at(&cal, "2024-01-05"), Some("M"));
    assert!(!cal.contains_key("2024-01-02"));
}

#[test]
fn test_window_radius_is_capped_and_saturates() {
    let r = MAX_PROJECTION_RADIUS as i32;
    assert_eq!(
        ProjectionWindow::around(2024, u32::MAX),
        ProjectionWindow::new(2024 - r, 2024 + r)
    );

    let top = ProjectionWindow::around(i32::MAX, 3);
    assert_eq!(top.last_year, i32::MAX);
    assert_eq!(top.first_year, i32::MAX - 3);

    let bottom = ProjectionWindow::around(i32::MIN, 3);
    assert_eq!(bottom.first_year, i32::MIN);
}
