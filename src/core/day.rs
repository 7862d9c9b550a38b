use crate::core::calculator::duplicate::duplicate_previous_year;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_day, load_calendar, load_shifts, save_calendar, set_day};
use crate::errors::{AppError, AppResult};
use crate::models::day::DayAssignment;
use crate::models::shift::find_shift;
use crate::ui::messages::{info, success};
use crate::utils::date::{iso, parse_date};

/// Manual edits of single days. These always override the rotation.
pub struct DayLogic;

impl DayLogic {
    /// `shift_id == None` stores an explicit "no shift" entry.
    pub fn set(pool: &mut DbPool, date: &str, shift_id: Option<&str>) -> AppResult<()> {
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let key = iso(date);

        let day = match shift_id {
            Some(id) => {
                let shifts = load_shifts(&pool.conn)?;
                if find_shift(&shifts, id).is_none() {
                    return Err(AppError::UnknownShift(id.to_string()));
                }
                DayAssignment::shift(id)
            }
            None => DayAssignment::none(),
        };

        set_day(&pool.conn, &key, &day)?;
        let shown = day.shift_id.as_deref().unwrap_or("none");
        ttlog_quiet(&pool.conn, "day_set", &key, &format!("Assigned {}", shown));
        success(format!("{} → {}", key, shown));
        Ok(())
    }

    /// Remove the entry; the next projection may fill the date again.
    pub fn clear(pool: &mut DbPool, date: &str) -> AppResult<()> {
        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let key = iso(date);

        if clear_day(&pool.conn, &key)? {
            ttlog_quiet(&pool.conn, "day_clear", &key, "Entry removed");
            success(format!("{} cleared", key));
        } else {
            info(format!("{} had no entry", key));
        }
        Ok(())
    }

    pub fn duplicate_year(pool: &mut DbPool, year: i32) -> AppResult<usize> {
        let source_year = year
            .checked_sub(1)
            .ok_or_else(|| AppError::InvalidDate(format!("year {} has no previous year", year)))?;
        let mut calendar = load_calendar(&pool.conn)?;
        let copied = duplicate_previous_year(&mut calendar, year);

        if copied > 0 {
            save_calendar(&mut pool.conn, &calendar)?;
            ttlog_quiet(
                &pool.conn,
                "duplicate_year",
                &year.to_string(),
                &format!("Copied {} days from {}", copied, source_year),
            );
            success(format!("Copied {} days from {} to {}", copied, source_year, year));
        } else {
            info(format!("No assignments found in {}", source_year));
        }
        Ok(copied)
    }
}
