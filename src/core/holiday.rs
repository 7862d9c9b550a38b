use crate::core::calculator::holidays::{national_holidays, resolve_holidays};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_custom_holiday, load_custom_holidays, load_disabled_holidays, set_custom_holiday,
    set_holiday_disabled,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::{iso, parse_date};
use crate::utils::table::Table;
use chrono::{Datelike, NaiveDate};

pub struct HolidayLogic;

fn parse_key(date: &str) -> AppResult<(NaiveDate, String)> {
    let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Ok((d, iso(d)))
}

impl HolidayLogic {
    /// National and custom holidays of `year`, with their state.
    pub fn list(pool: &mut DbPool, year: i32) -> AppResult<()> {
        let custom = load_custom_holidays(&pool.conn)?;
        let disabled = load_disabled_holidays(&pool.conn)?;
        let national = national_holidays(year);
        let resolved = resolve_holidays(year, &custom, &disabled);

        let mut table = Table::with_headers(&["Date", "Name", "Source", "Active"]);

        let mut dates: Vec<&String> = national.keys().chain(resolved.keys()).collect();
        dates.sort();
        dates.dedup();

        for date in dates {
            let is_custom = custom.contains_key(date);
            let name = resolved
                .get(date)
                .or_else(|| national.get(date))
                .cloned()
                .unwrap_or_default();
            let source = match (is_custom, national.contains_key(date)) {
                (true, true) => "custom (overrides national)",
                (true, false) => "custom",
                _ => "national",
            };
            let active = if resolved.contains_key(date) { "yes" } else { "disabled" };
            table.add_row(vec![date.clone(), name, source.to_string(), active.to_string()]);
        }

        println!("=== Holidays {} ===", year);
        print!("{}", table.render());
        Ok(())
    }

    pub fn add(pool: &mut DbPool, date: &str, name: &str) -> AppResult<()> {
        let (_, key) = parse_key(date)?;
        set_custom_holiday(&pool.conn, &key, name)?;
        ttlog_quiet(&pool.conn, "holiday_add", &key, name);
        success(format!("Holiday {} '{}' added", key, name));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, date: &str) -> AppResult<()> {
        let (_, key) = parse_key(date)?;
        if delete_custom_holiday(&pool.conn, &key)? {
            ttlog_quiet(&pool.conn, "holiday_del", &key, "Custom holiday removed");
            success(format!("Custom holiday {} removed", key));
        } else {
            info(format!("No custom holiday on {}", key));
        }
        Ok(())
    }

    /// Only dates that carry a national holiday can be switched off.
    pub fn set_disabled(pool: &mut DbPool, date: &str, disabled: bool) -> AppResult<()> {
        let (d, key) = parse_key(date)?;
        let national = national_holidays(d.year());
        let Some(name) = national.get(&key) else {
            return Err(AppError::InvalidDate(format!(
                "{} is not a national holiday",
                key
            )));
        };

        set_holiday_disabled(&pool.conn, &key, disabled)?;
        let op = if disabled { "holiday_disable" } else { "holiday_enable" };
        ttlog_quiet(&pool.conn, op, &key, name);
        if disabled {
            success(format!("National holiday {} '{}' disabled", key, name));
        } else {
            success(format!("National holiday {} '{}' enabled", key, name));
        }
        Ok(())
    }
}
