use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_shift, insert_shift, load_shifts, update_shift};
use crate::errors::{AppError, AppResult};
use crate::models::shift::{COLORS, Shift, find_shift, is_valid_shift_id};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{hours2readable, parse_hex_color};
use crate::utils::table::Table;
use crate::utils::time::is_valid_optional_time;

/// Optional field changes for `shift edit`.
#[derive(Debug, Default)]
pub struct ShiftUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

pub struct ShiftLogic;

fn validate_times(shift: &Shift) -> AppResult<()> {
    for t in [&shift.start_time, &shift.end_time] {
        if !is_valid_optional_time(t) {
            return Err(AppError::InvalidTime(t.clone()));
        }
    }
    Ok(())
}

fn validate_color(color: &str) -> AppResult<()> {
    if parse_hex_color(color).is_none() {
        return Err(AppError::InvalidColor(color.to_string()));
    }
    Ok(())
}

impl ShiftLogic {
    /// Add a shift to the catalog, then re-project the rotation since
    /// sequence steps naming this id may now produce assignments.
    pub fn add(pool: &mut DbPool, cfg: &Config, mut shift: Shift) -> AppResult<()> {
        if !is_valid_shift_id(&shift.id) {
            return Err(AppError::InvalidShiftId(shift.id));
        }
        validate_times(&shift)?;

        let shifts = load_shifts(&pool.conn)?;
        if find_shift(&shifts, &shift.id).is_some() {
            return Err(AppError::DuplicateShift(shift.id));
        }

        if shift.color.trim().is_empty() {
            shift.color = COLORS[shifts.len() % COLORS.len()].to_string();
        }
        validate_color(&shift.color)?;

        insert_shift(&pool.conn, &shift)?;
        ttlog_quiet(&pool.conn, "shift_add", &shift.id, &format!("Added shift '{}'", shift.name));
        success(format!("Shift {} ({}) added", shift.id, shift.name));

        Self::reproject(pool, cfg)
    }

    pub fn edit(pool: &mut DbPool, cfg: &Config, id: &str, update: ShiftUpdate) -> AppResult<()> {
        let shifts = load_shifts(&pool.conn)?;
        let mut shift = find_shift(&shifts, id)
            .cloned()
            .ok_or_else(|| AppError::UnknownShift(id.to_string()))?;

        if let Some(name) = update.name {
            shift.name = name;
        }
        if let Some(color) = update.color {
            validate_color(&color)?;
            shift.color = color;
        }
        if let Some(start) = update.start {
            shift.start_time = start;
        }
        if let Some(end) = update.end {
            shift.end_time = end;
        }
        validate_times(&shift)?;

        update_shift(&pool.conn, &shift)?;
        ttlog_quiet(&pool.conn, "shift_edit", id, "Shift updated");
        success(format!("Shift {} updated", id));

        Self::reproject(pool, cfg)
    }

    /// Calendar days already assigned to `id` keep it and show as unknown.
    pub fn delete(pool: &mut DbPool, id: &str) -> AppResult<()> {
        if !delete_shift(&pool.conn, id)? {
            return Err(AppError::UnknownShift(id.to_string()));
        }
        ttlog_quiet(&pool.conn, "shift_del", id, "Shift deleted");
        success(format!("Shift {} deleted", id));
        Ok(())
    }

    pub fn list(pool: &mut DbPool) -> AppResult<()> {
        let shifts = load_shifts(&pool.conn)?;
        if shifts.is_empty() {
            info("No shifts defined. Add one with `shiftplan shift add`.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["Id", "Name", "Color", "Time", "Hours"]);
        for s in &shifts {
            table.add_row(vec![
                s.id.clone(),
                s.name.clone(),
                s.color.clone(),
                s.time_range(),
                hours2readable(s.duration_hours(), false),
            ]);
        }
        print!("{}", table.render());
        Ok(())
    }

    fn reproject(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let report = ApplyLogic::apply(pool, cfg)?;
        if report.filled > 0 {
            info(format!("Rotation filled {} new days", report.filled));
        }
        Ok(())
    }
}
