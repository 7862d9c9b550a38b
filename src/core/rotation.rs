use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_rotation, load_shifts, save_rotation};
use crate::errors::{AppError, AppResult};
use crate::models::rotation::Rotation;
use crate::models::shift::find_shift;
use crate::ui::messages::{detail, info, success, warning};
use crate::utils::date::{iso, parse_date};

pub struct RotationLogic;

impl RotationLogic {
    /// Replace the active rotation and project it.
    pub fn set(
        pool: &mut DbPool,
        cfg: &Config,
        name: &str,
        sequence: Vec<String>,
        start: &str,
    ) -> AppResult<()> {
        let start_date = parse_date(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;

        let shifts = load_shifts(&pool.conn)?;
        let unknown: Vec<&str> = sequence
            .iter()
            .map(String::as_str)
            .filter(|id| find_shift(&shifts, id).is_none())
            .collect();
        if !unknown.is_empty() {
            warning(format!(
                "Unknown shift ids in sequence, their days stay empty: {}",
                unknown.join(", ")
            ));
        }

        let rotation = Rotation::new(name, sequence, &iso(start_date));
        save_rotation(&pool.conn, Some(&rotation))?;
        ttlog_quiet(
            &pool.conn,
            "rotation_set",
            &rotation.start_date,
            &format!("Rotation '{}': {}", rotation.name, rotation.sequence.join(" ")),
        );
        success(format!(
            "Rotation '{}' set ({} steps from {})",
            rotation.name,
            rotation.sequence.len(),
            rotation.start_date
        ));

        let report = ApplyLogic::apply(pool, cfg)?;
        info(format!(
            "Projected {} days ({} filled, {} already assigned)",
            report.staged, report.filled, report.kept
        ));
        Ok(())
    }

    pub fn show(pool: &mut DbPool) -> AppResult<()> {
        match load_rotation(&pool.conn)? {
            Some(r) => {
                info(format!("Rotation '{}'", r.name));
                detail(format!("start:    {}", r.start_date));
                detail(format!("sequence: {}", r.sequence.join(" ")));
                detail(format!("length:   {} days", r.sequence.len()));
            }
            None => info("No rotation defined."),
        }
        Ok(())
    }

    /// Removing the rotation keeps every day it already filled.
    pub fn clear(pool: &mut DbPool) -> AppResult<()> {
        save_rotation(&pool.conn, None)?;
        ttlog_quiet(&pool.conn, "rotation_clear", "", "Rotation removed");
        success("Rotation removed");
        Ok(())
    }
}
