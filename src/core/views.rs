//! Terminal renderings of the planner: month grid, full-year table and
//! statistics report. Every function returns the text; callers print it.

use crate::core::calculator::stats::unknown_shift_ids;
use crate::models::day::CalendarMap;
use crate::models::holiday::HolidayMap;
use crate::models::shift::{Shift, find_shift};
use crate::models::stats::ScheduleStats;
use crate::utils::colors::{GREY, HOLIDAY_BG, RESET, color_for_difference};
use crate::utils::date::{all_days_of_month, is_weekend, iso, month_name};
use crate::utils::formatting::{ansi_from_hex, hours2readable};
use crate::utils::table::Table;
use chrono::{Datelike, NaiveDate};

/// Restrict the month grid to matching days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarFilter {
    Shift(String),
    Holiday,
}

impl CalendarFilter {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("holiday") {
            CalendarFilter::Holiday
        } else {
            CalendarFilter::Shift(s.to_string())
        }
    }

    fn matches(&self, shift_id: Option<&str>, is_holiday: bool) -> bool {
        match self {
            CalendarFilter::Holiday => is_holiday,
            CalendarFilter::Shift(id) => shift_id == Some(id.as_str()),
        }
    }
}

/// Read-only inputs shared by the calendar views.
pub struct CalendarView<'a> {
    pub calendar: &'a CalendarMap,
    pub shifts: &'a [Shift],
    pub holidays: &'a HolidayMap,
    pub use_color: bool,
}

impl CalendarView<'_> {
    fn shift_id_for(&self, date: NaiveDate) -> Option<&str> {
        self.calendar
            .get(&iso(date))
            .and_then(|d| d.shift_id.as_deref())
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_color && !color.is_empty() {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Short code shown for a day: shift id, `?` for an unknown id,
    /// `F` for a holiday without shift, `.` otherwise.
    fn day_code(&self, date: NaiveDate) -> (String, String) {
        let is_holiday = self.holidays.contains_key(&iso(date));
        match self.shift_id_for(date) {
            Some(id) => match find_shift(self.shifts, id) {
                Some(shift) => (id.to_string(), ansi_from_hex(&shift.color)),
                None => ("?".to_string(), String::new()),
            },
            None if is_holiday => ("F".to_string(), HOLIDAY_BG.to_string()),
            None if is_weekend(date) => (".".to_string(), GREY.to_string()),
            None => (".".to_string(), String::new()),
        }
    }

    /// Month grid, Monday first, followed by that month's holidays.
    pub fn render_month(&self, year: i32, month: u32, filter: Option<&CalendarFilter>) -> String {
        let days = all_days_of_month(year, month);
        let mut out = format!("=== {} {} ===\n", month_name(month), year);
        out.push_str("  Mo    Tu    We    Th    Fr    Sa    Su\n");

        let Some(first) = days.first() else {
            return out;
        };

        let lead = first.weekday().num_days_from_monday() as usize;
        let mut line = "      ".repeat(lead);
        for date in &days {
            let key = iso(*date);
            let is_holiday = self.holidays.contains_key(&key);
            let (code, color) = self.day_code(*date);

            let visible = filter
                .map(|f| f.matches(self.shift_id_for(*date), is_holiday))
                .unwrap_or(true);

            let marker = if is_holiday { '*' } else { ' ' };
            let code: String = code.chars().take(3).collect();
            let cell = if visible {
                format!("{:>2}{}{}", date.day(), marker, self.paint(&color, &format!("{code:<3}")))
            } else {
                self.paint(GREY, &format!("{:>2}    ", date.day()))
            };
            line.push_str(&cell);

            if date.weekday().num_days_from_monday() == 6 {
                out.push_str(line.trim_end());
                out.push('\n');
                line.clear();
            }
        }
        if !line.trim().is_empty() {
            out.push_str(line.trim_end());
            out.push('\n');
        }

        let month_holidays: Vec<_> = self
            .holidays
            .iter()
            .filter(|(k, _)| k.starts_with(&format!("{:04}-{:02}-", year, month)))
            .collect();
        if !month_holidays.is_empty() {
            out.push('\n');
            for (date, name) in month_holidays {
                out.push_str(&format!("  * {} {}\n", date, name));
            }
        }

        out
    }

    /// One row per month, one column per day of month.
    pub fn render_year(&self, year: i32) -> String {
        let mut out = format!("=== Year {} ===\n", year);

        out.push_str("    ");
        for d in 1..=31 {
            out.push_str(&format!("{:>3}", d));
        }
        out.push('\n');

        for month in 1..=12u32 {
            out.push_str(&format!("{:<4}", &month_name(month)[..3]));
            for date in all_days_of_month(year, month) {
                let (code, color) = self.day_code(date);
                let code: String = code.chars().take(2).collect();
                out.push(' ');
                out.push_str(&self.paint(&color, &format!("{code:>2}")));
            }
            out.push('\n');
        }

        let legend: Vec<String> = self
            .shifts
            .iter()
            .map(|s| format!("{}={}", s.id, s.name))
            .collect();
        out.push_str(&format!("\n{}  F=holiday  ?=unknown shift\n", legend.join("  ")));

        out
    }
}

/// Annual summary plus one line per month.
pub fn render_stats(
    stats: &ScheduleStats,
    shifts: &[Shift],
    target_annual_hours: f64,
    use_color: bool,
) -> String {
    let mut out = format!("=== Statistics {} ===\n\n", stats.year);

    let mut summary = Table::with_headers(&["Shift", "Name", "Hours/day", "Days"]);
    for s in shifts {
        summary.add_row(vec![
            s.id.clone(),
            s.name.clone(),
            hours2readable(s.duration_hours(), false),
            stats.annual.count(&s.id).to_string(),
        ]);
    }
    for id in unknown_shift_ids(&stats.annual, shifts) {
        summary.add_row(vec![
            id.to_string(),
            "(unknown)".to_string(),
            "-".to_string(),
            stats.annual.count(id).to_string(),
        ]);
    }
    out.push_str(&summary.render());

    let diff = stats.hour_difference(target_annual_hours);
    let diff_txt = hours2readable(diff, true);
    let diff_txt = if use_color {
        format!("{}{}{}", color_for_difference(diff), diff_txt, RESET)
    } else {
        diff_txt
    };
    out.push_str(&format!(
        "\nTarget hours: {}\nWorked hours: {}\nDifference:   {}\n\n",
        hours2readable(target_annual_hours, false),
        hours2readable(stats.annual.total_hours, false),
        diff_txt
    ));

    let ids: Vec<&str> = stats.annual.counts.keys().map(String::as_str).collect();
    let mut headers = vec!["Month"];
    headers.extend(ids.iter().copied());
    headers.push("Hours");

    let mut monthly = Table::with_headers(&headers);
    for (i, month) in stats.per_month.iter().enumerate() {
        let mut row = vec![month_name(i as u32 + 1).to_string()];
        row.extend(ids.iter().map(|id| month.count(id).to_string()));
        row.push(hours2readable(month.total_hours, false));
        monthly.add_row(row);
    }
    out.push_str(&monthly.render());

    out
}
