use crate::errors::{AppError, AppResult};
use crate::models::day::{CalendarMap, DayAssignment};
use crate::models::holiday::{CustomHolidays, DisabledHolidays};
use crate::models::rotation::Rotation;
use crate::models::shift::Shift;
use crate::models::state::{DEFAULT_TARGET_ANNUAL_HOURS, PlannerState};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SETTING_TARGET: &str = "target_annual_hours";

// ---------------------------
// Shifts
// ---------------------------

fn map_shift(row: &Row) -> rusqlite::Result<Shift> {
    Ok(Shift {
        id: row.get("id")?,
        name: row.get("name")?,
        color: row.get("color")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
    })
}

pub fn load_shifts(conn: &Connection) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, color, start_time, end_time FROM shifts
         ORDER BY position ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_shift)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_shift(conn: &Connection, shift: &Shift) -> AppResult<()> {
    let next_pos: i64 = conn.query_row(
        "SELECT IFNULL(MAX(position), -1) + 1 FROM shifts",
        [],
        |row| row.get(0),
    )?;

    conn.execute(
        "INSERT INTO shifts (id, name, color, start_time, end_time, position)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            shift.id,
            shift.name,
            shift.color,
            shift.start_time,
            shift.end_time,
            next_pos
        ],
    )?;
    Ok(())
}

/// Returns false when no shift with that id exists.
pub fn update_shift(conn: &Connection, shift: &Shift) -> AppResult<bool> {
    let n = conn.execute(
        "UPDATE shifts SET name = ?2, color = ?3, start_time = ?4, end_time = ?5
         WHERE id = ?1",
        params![
            shift.id,
            shift.name,
            shift.color,
            shift.start_time,
            shift.end_time
        ],
    )?;
    Ok(n > 0)
}

/// Calendar entries pointing at the deleted id are left in place.
pub fn delete_shift(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM shifts WHERE id = ?1", [id])?;
    Ok(n > 0)
}

fn replace_shifts(conn: &Connection, shifts: &[Shift]) -> AppResult<()> {
    conn.execute("DELETE FROM shifts", [])?;
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO shifts (id, name, color, start_time, end_time, position)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for (pos, s) in shifts.iter().enumerate() {
        stmt.execute(params![
            s.id,
            s.name,
            s.color,
            s.start_time,
            s.end_time,
            pos as i64
        ])?;
    }
    Ok(())
}

// ---------------------------
// Rotation
// ---------------------------

pub fn load_rotation(conn: &Connection) -> AppResult<Option<Rotation>> {
    let row = conn
        .query_row(
            "SELECT name, sequence, start_date FROM rotation WHERE slot = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    let Some((name, sequence, start_date)) = row else {
        return Ok(None);
    };

    let sequence: Vec<String> = serde_json::from_str(&sequence).map_err(|e| {
        AppError::Migration(format!("corrupt rotation sequence in database: {e}"))
    })?;

    Ok(Some(Rotation {
        name,
        sequence,
        start_date,
    }))
}

pub fn save_rotation(conn: &Connection, rotation: Option<&Rotation>) -> AppResult<()> {
    match rotation {
        Some(r) => {
            let sequence = serde_json::to_string(&r.sequence)?;
            conn.execute(
                "INSERT OR REPLACE INTO rotation (slot, name, sequence, start_date)
                 VALUES (1, ?1, ?2, ?3)",
                params![r.name, sequence, r.start_date],
            )?;
        }
        None => {
            conn.execute("DELETE FROM rotation", [])?;
        }
    }
    Ok(())
}

// ---------------------------
// Calendar
// ---------------------------

pub fn load_calendar(conn: &Connection) -> AppResult<CalendarMap> {
    let mut stmt = conn.prepare("SELECT date, shift_id FROM calendar ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            DayAssignment {
                shift_id: row.get::<_, Option<String>>(1)?,
            },
        ))
    })?;

    let mut out = CalendarMap::new();
    for r in rows {
        let (date, day) = r?;
        out.insert(date, day);
    }
    Ok(out)
}

pub fn set_day(conn: &Connection, date: &str, day: &DayAssignment) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO calendar (date, shift_id) VALUES (?1, ?2)",
        params![date, day.shift_id],
    )?;
    Ok(())
}

pub fn clear_day(conn: &Connection, date: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM calendar WHERE date = ?1", [date])?;
    Ok(n > 0)
}

pub fn replace_calendar(conn: &Connection, calendar: &CalendarMap) -> AppResult<()> {
    conn.execute("DELETE FROM calendar", [])?;
    let mut stmt = conn.prepare("INSERT INTO calendar (date, shift_id) VALUES (?1, ?2)")?;
    for (date, day) in calendar {
        stmt.execute(params![date, day.shift_id])?;
    }
    Ok(())
}

// ---------------------------
// Holidays
// ---------------------------

pub fn load_custom_holidays(conn: &Connection) -> AppResult<CustomHolidays> {
    let mut stmt = conn.prepare("SELECT date, name FROM custom_holidays ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = CustomHolidays::new();
    for r in rows {
        let (date, name) = r?;
        out.insert(date, name);
    }
    Ok(out)
}

pub fn set_custom_holiday(conn: &Connection, date: &str, name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO custom_holidays (date, name) VALUES (?1, ?2)",
        [date, name],
    )?;
    Ok(())
}

pub fn delete_custom_holiday(conn: &Connection, date: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM custom_holidays WHERE date = ?1", [date])?;
    Ok(n > 0)
}

fn replace_custom_holidays(conn: &Connection, custom: &CustomHolidays) -> AppResult<()> {
    conn.execute("DELETE FROM custom_holidays", [])?;
    for (date, name) in custom {
        set_custom_holiday(conn, date, name)?;
    }
    Ok(())
}

pub fn load_disabled_holidays(conn: &Connection) -> AppResult<DisabledHolidays> {
    let mut stmt = conn.prepare("SELECT date, disabled FROM disabled_holidays ORDER BY date ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? != 0))
    })?;

    let mut out = DisabledHolidays::new();
    for r in rows {
        let (date, disabled) = r?;
        out.insert(date, disabled);
    }
    Ok(out)
}

pub fn set_holiday_disabled(conn: &Connection, date: &str, disabled: bool) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO disabled_holidays (date, disabled) VALUES (?1, ?2)",
        params![date, disabled as i64],
    )?;
    Ok(())
}

fn replace_disabled_holidays(conn: &Connection, disabled: &DisabledHolidays) -> AppResult<()> {
    conn.execute("DELETE FROM disabled_holidays", [])?;
    for (date, flag) in disabled {
        set_holiday_disabled(conn, date, *flag)?;
    }
    Ok(())
}

// ---------------------------
// Settings
// ---------------------------

pub fn load_target(conn: &Connection) -> AppResult<f64> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [SETTING_TARGET],
            |row| row.get(0),
        )
        .optional()?;

    Ok(raw
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(DEFAULT_TARGET_ANNUAL_HOURS))
}

pub fn save_target(conn: &Connection, hours: f64) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        params![SETTING_TARGET, hours.to_string()],
    )?;
    Ok(())
}

// ---------------------------
// Whole state
// ---------------------------

pub fn load_state(conn: &Connection) -> AppResult<PlannerState> {
    Ok(PlannerState {
        shifts: load_shifts(conn)?,
        rotation: load_rotation(conn)?,
        calendar_data: load_calendar(conn)?,
        custom_holidays: load_custom_holidays(conn)?,
        disabled_national_holidays: load_disabled_holidays(conn)?,
        target_annual_hours: load_target(conn)?,
    })
}

/// Overwrite every persisted field in one transaction.
pub fn save_state(conn: &mut Connection, state: &PlannerState) -> AppResult<()> {
    let tx = conn.transaction()?;
    replace_shifts(&tx, &state.shifts)?;
    save_rotation(&tx, state.rotation.as_ref())?;
    replace_calendar(&tx, &state.calendar_data)?;
    replace_custom_holidays(&tx, &state.custom_holidays)?;
    replace_disabled_holidays(&tx, &state.disabled_national_holidays)?;
    save_target(&tx, state.target_annual_hours)?;
    tx.commit()?;
    Ok(())
}

/// Replace only the calendar map, transactionally.
pub fn save_calendar(conn: &mut Connection, calendar: &CalendarMap) -> AppResult<()> {
    let tx = conn.transaction()?;
    replace_calendar(&tx, calendar)?;
    tx.commit()?;
    Ok(())
}
