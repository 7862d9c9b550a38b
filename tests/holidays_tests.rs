use chrono::{Datelike, NaiveDate};
use shiftplan::core::calculator::holidays::{
    NationalHoliday, easter_sunday, national_holidays, resolve_holidays,
};
use shiftplan::models::holiday::{CustomHolidays, DisabledHolidays};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_easter_known_dates() {
    assert_eq!(easter_sunday(2024), Some(ymd(2024, 3, 31)));
    assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
    assert_eq!(easter_sunday(2000), Some(ymd(2000, 4, 23)));
    assert_eq!(easter_sunday(2038), Some(ymd(2038, 4, 25)));
    // earliest possible Easter
    assert_eq!(easter_sunday(1818), Some(ymd(1818, 3, 22)));
}

#[test]
fn test_national_holidays_has_eleven_entries_in_the_same_year() {
    for year in 1900..=2100 {
        let map = national_holidays(year);
        assert_eq!(map.len(), 11, "year {year}");
        for key in map.keys() {
            let d = NaiveDate::parse_from_str(key, "%Y-%m-%d").unwrap();
            assert_eq!(d.year(), year, "{key} outside {year}");
        }
    }
}

#[test]
fn test_easter_relative_holidays_2024() {
    let map = national_holidays(2024);
    assert_eq!(map.get("2024-03-29").map(String::as_str), Some("Viernes Santo"));
    assert_eq!(map.get("2024-03-28").map(String::as_str), Some("Jueves Santo"));
    assert!(!map.contains_key("2024-03-31"));
}

#[test]
fn test_holy_thursday_is_three_days_before_easter() {
    for year in [2019, 2023, 2025, 2027, 2038] {
        let easter = easter_sunday(year).unwrap();
        let thu = NationalHoliday::HolyThursday.date(year, easter).unwrap();
        let fri = NationalHoliday::GoodFriday.date(year, easter).unwrap();
        assert_eq!((easter - thu).num_days(), 3);
        assert_eq!((easter - fri).num_days(), 2);
    }
}

#[test]
fn test_fixed_holidays_present() {
    let map = national_holidays(2025);
    for key in [
        "2025-01-01",
        "2025-01-06",
        "2025-05-01",
        "2025-08-15",
        "2025-10-12",
        "2025-11-01",
        "2025-12-06",
        "2025-12-08",
        "2025-12-25",
    ] {
        assert!(map.contains_key(key), "missing {key}");
    }
    assert_eq!(map["2025-12-25"], "Navidad");
}

#[test]
fn test_disabled_holiday_is_removed() {
    let custom = CustomHolidays::new();
    let mut disabled = DisabledHolidays::new();
    disabled.insert("2024-03-28".to_string(), true);

    let map = resolve_holidays(2024, &custom, &disabled);
    assert_eq!(map.len(), 10);
    assert!(!map.contains_key("2024-03-28"));
    assert!(map.contains_key("2024-03-29"));
}

#[test]
fn test_disabled_flag_false_keeps_holiday() {
    let mut disabled = DisabledHolidays::new();
    disabled.insert("2024-01-06".to_string(), false);

    let map = resolve_holidays(2024, &CustomHolidays::new(), &disabled);
    assert!(map.contains_key("2024-01-06"));
}

#[test]
fn test_custom_holiday_overrides_national_name() {
    let mut custom = CustomHolidays::new();
    custom.insert("2024-12-25".to_string(), "Christmas at home".to_string());

    let map = resolve_holidays(2024, &custom, &DisabledHolidays::new());
    assert_eq!(map["2024-12-25"], "Christmas at home");
    assert_eq!(map.len(), 11);
}

#[test]
fn test_custom_holidays_only_for_requested_year() {
    let mut custom = CustomHolidays::new();
    custom.insert("2024-06-24".to_string(), "San Juan".to_string());
    custom.insert("2025-06-24".to_string(), "San Juan".to_string());

    let map = resolve_holidays(2025, &custom, &DisabledHolidays::new());
    assert!(map.contains_key("2025-06-24"));
    assert!(!map.contains_key("2024-06-24"));
    assert_eq!(map.len(), 12);
}

#[test]
fn test_custom_holiday_wins_over_disabled_national() {
    let mut custom = CustomHolidays::new();
    custom.insert("2024-05-01".to_string(), "Local fair".to_string());
    let mut disabled = DisabledHolidays::new();
    disabled.insert("2024-05-01".to_string(), true);

    let map = resolve_holidays(2024, &custom, &disabled);
    assert_eq!(map["2024-05-01"], "Local fair");
}
