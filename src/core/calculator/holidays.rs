//! National holiday calendar (Spain) and the per-year holiday resolver.

use crate::models::holiday::{CustomHolidays, DisabledHolidays, HolidayMap};
use crate::utils::date::{iso, key_year};
use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

/// The eleven national holidays: nine on fixed dates, two tied to Easter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NationalHoliday {
    NewYear,
    Epiphany,
    HolyThursday,
    GoodFriday,
    LabourDay,
    Assumption,
    NationalDay,
    AllSaints,
    ConstitutionDay,
    ImmaculateConception,
    Christmas,
}

impl NationalHoliday {
    pub const ALL: [NationalHoliday; 11] = [
        NationalHoliday::NewYear,
        NationalHoliday::Epiphany,
        NationalHoliday::HolyThursday,
        NationalHoliday::GoodFriday,
        NationalHoliday::LabourDay,
        NationalHoliday::Assumption,
        NationalHoliday::NationalDay,
        NationalHoliday::AllSaints,
        NationalHoliday::ConstitutionDay,
        NationalHoliday::ImmaculateConception,
        NationalHoliday::Christmas,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NationalHoliday::NewYear => "Año Nuevo",
            NationalHoliday::Epiphany => "Epifanía del Señor",
            NationalHoliday::HolyThursday => "Jueves Santo",
            NationalHoliday::GoodFriday => "Viernes Santo",
            NationalHoliday::LabourDay => "Fiesta del Trabajo",
            NationalHoliday::Assumption => "Asunción de la Virgen",
            NationalHoliday::NationalDay => "Fiesta Nacional de España",
            NationalHoliday::AllSaints => "Día de todos los Santos",
            NationalHoliday::ConstitutionDay => "Día de la Constitución Española",
            NationalHoliday::ImmaculateConception => "Inmaculada Concepción",
            NationalHoliday::Christmas => "Navidad",
        }
    }

    /// Date of this holiday in `year`, given that year's Easter Sunday.
    ///
    /// Easter-relative holidays are offsets from `easter` itself, never
    /// from one another.
    pub fn date(&self, year: i32, easter: NaiveDate) -> Option<NaiveDate> {
        let fixed = |month, day| NaiveDate::from_ymd_opt(year, month, day);
        match self {
            NationalHoliday::NewYear => fixed(1, 1),
            NationalHoliday::Epiphany => fixed(1, 6),
            NationalHoliday::HolyThursday => easter.checked_sub_days(Days::new(3)),
            NationalHoliday::GoodFriday => easter.checked_sub_days(Days::new(2)),
            NationalHoliday::LabourDay => fixed(5, 1),
            NationalHoliday::Assumption => fixed(8, 15),
            NationalHoliday::NationalDay => fixed(10, 12),
            NationalHoliday::AllSaints => fixed(11, 1),
            NationalHoliday::ConstitutionDay => fixed(12, 6),
            NationalHoliday::ImmaculateConception => fixed(12, 8),
            NationalHoliday::Christmas => fixed(12, 25),
        }
    }
}

/// Easter Sunday (anonymous Gregorian computus).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// National holidays of `year`, keyed by ISO date.
///
/// Only dates that actually fall in `year` are returned. Years chrono
/// cannot represent give an empty map.
pub fn national_holidays(year: i32) -> HolidayMap {
    let mut out = HolidayMap::new();
    let Some(easter) = easter_sunday(year) else {
        return out;
    };

    for holiday in NationalHoliday::ALL {
        if let Some(date) = holiday.date(year, easter)
            && date.year() == year
        {
            out.insert(iso(date), holiday.name().to_string());
        }
    }

    out
}

/// Holidays shown for `year`.
///
/// National holidays flagged in `disabled` are dropped, then custom
/// holidays of the same year are laid on top and win any conflict.
pub fn resolve_holidays(
    year: i32,
    custom: &CustomHolidays,
    disabled: &DisabledHolidays,
) -> HolidayMap {
    let mut out = national_holidays(year);

    out.retain(|date, _| !disabled.get(date).copied().unwrap_or(false));

    for (date, name) in custom {
        if key_year(date) == Some(year) {
            out.insert(date.clone(), name.clone());
        }
    }

    debug!(year, count = out.len(), "holidays resolved");
    out
}
