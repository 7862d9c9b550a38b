use serde_json::Value;
use shiftplan::core::transfer::{export_document, import_document};
use shiftplan::errors::AppError;
use shiftplan::models::day::DayAssignment;
use shiftplan::models::rotation::Rotation;
use shiftplan::models::shift::default_catalog;
use shiftplan::models::state::PlannerState;

fn sample_state() -> PlannerState {
    let mut state = PlannerState {
        shifts: default_catalog(),
        rotation: Some(Rotation::new(
            "4x1",
            vec!["M".into(), "T".into(), "N".into(), "L".into()],
            "2024-01-01",
        )),
        target_annual_hours: 1720.5,
        ..PlannerState::default()
    };
    state
        .calendar_data
        .insert("2024-01-01".into(), DayAssignment::shift("M"));
    state
        .calendar_data
        .insert("2024-01-02".into(), DayAssignment::none());
    state
        .custom_holidays
        .insert("2024-06-24".into(), "San Juan".into());
    state
        .disabled_national_holidays
        .insert("2024-03-28".into(), true);
    state
}

#[test]
fn test_export_has_exactly_six_fields() {
    let text = export_document(&sample_state()).unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();
    let obj = doc.as_object().unwrap();

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "calendarData",
            "customHolidays",
            "disabledNationalHolidays",
            "rotation",
            "shifts",
            "targetAnnualHours",
        ]
    );
    assert_eq!(obj["calendarData"]["2024-01-01"]["shiftId"], "M");
    assert!(obj["calendarData"]["2024-01-02"]["shiftId"].is_null());
    assert_eq!(obj["shifts"][0]["startTime"], "06:00");
}

#[test]
fn test_export_then_import_restores_state() {
    let original = sample_state();
    let text = export_document(&original).unwrap();

    let mut restored = PlannerState::default();
    let report = import_document(&text, &mut restored).unwrap();

    assert_eq!(restored, original);
    assert_eq!(report.applied.len(), 6);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_partial_import_touches_only_present_fields() {
    let mut state = sample_state();
    let before = state.clone();

    let report = import_document(r#"{"targetAnnualHours": 1500}"#, &mut state).unwrap();

    assert_eq!(report.applied, vec!["targetAnnualHours"]);
    assert_eq!(state.target_annual_hours, 1500.0);
    assert_eq!(state.shifts, before.shifts);
    assert_eq!(state.rotation, before.rotation);
    assert_eq!(state.calendar_data, before.calendar_data);
    assert_eq!(state.custom_holidays, before.custom_holidays);
}

#[test]
fn test_invalid_json_leaves_state_unchanged() {
    let mut state = sample_state();
    let before = state.clone();

    let err = import_document("{ not json", &mut state).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
    assert_eq!(state, before);

    let err = import_document("[1, 2, 3]", &mut state).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
    assert_eq!(state, before);
}

#[test]
fn test_malformed_field_is_skipped() {
    let mut state = sample_state();
    let before = state.clone();

    let doc = r#"{
        "shifts": "oops",
        "customHolidays": {"2025-06-24": "San Juan"}
    }"#;
    let report = import_document(doc, &mut state).unwrap();

    assert_eq!(report.skipped, vec!["shifts"]);
    assert_eq!(report.applied, vec!["customHolidays"]);
    assert_eq!(state.shifts, before.shifts);
    assert_eq!(state.custom_holidays.len(), 1);
    assert!(state.custom_holidays.contains_key("2025-06-24"));
}

#[test]
fn test_null_rotation_clears_it() {
    let mut state = sample_state();
    import_document(r#"{"rotation": null}"#, &mut state).unwrap();
    assert!(state.rotation.is_none());
}

#[test]
fn test_empty_object_changes_nothing() {
    let mut state = sample_state();
    let before = state.clone();

    let report = import_document("{}", &mut state).unwrap();
    assert!(report.is_empty());
    assert_eq!(state, before);
}

#[test]
fn test_legacy_rotations_array_is_accepted() {
    let mut state = PlannerState::default();
    let doc = r#"{
        "rotations": [
            {"name": "old", "sequence": ["N", "L"], "startDate": "2023-05-01"},
            {"name": "other", "sequence": ["M"], "startDate": "2023-06-01"}
        ]
    }"#;
    import_document(doc, &mut state).unwrap();

    let rotation = state.rotation.unwrap();
    assert_eq!(rotation.name, "old");
    assert_eq!(rotation.sequence, vec!["N", "L"]);
}

#[test]
fn test_rotation_field_wins_over_legacy_rotations() {
    let mut state = PlannerState::default();
    let doc = r#"{
        "rotation": {"name": "new", "sequence": ["M"], "startDate": "2024-01-01"},
        "rotations": [{"name": "old", "sequence": ["N"], "startDate": "2023-01-01"}]
    }"#;
    import_document(doc, &mut state).unwrap();

    assert_eq!(state.rotation.unwrap().name, "new");
}

#[test]
fn test_shifts_with_repeated_id_are_skipped() {
    let mut state = sample_state();
    let before = state.clone();

    let doc = r##"{
        "shifts": [
            {"id": "M", "name": "Mañana", "color": "#ef4444", "startTime": "06:00", "endTime": "14:00"},
            {"id": "M", "name": "Otra", "color": "#22c55e"}
        ],
        "targetAnnualHours": 1600
    }"##;
    let report = import_document(doc, &mut state).unwrap();

    assert_eq!(report.skipped, vec!["shifts"]);
    assert_eq!(report.applied, vec!["targetAnnualHours"]);
    assert_eq!(state.shifts, before.shifts);
    assert_eq!(state.target_annual_hours, 1600.0);
}
