use crate::config::Config;
use crate::core::apply::ApplyLogic;
use crate::core::transfer::import_document;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_state, save_state};
use crate::errors::AppResult;
use crate::export::csv::write_year_csv;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::{detail, info, success, warning};
use crate::utils::date::current_year;
use std::path::Path;

/// High-level logic for `export` and `import`.
pub struct ExportLogic;

impl ExportLogic {
    /// - `Json`: full backup document, `year` is ignored.
    /// - `Csv`: day table of `year` (default: current year).
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        year: Option<i32>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;
        ensure_parent(path)?;

        let state = load_state(&pool.conn)?;

        match format {
            ExportFormat::Json => {
                if year.is_some() {
                    warning("--year is ignored for JSON backups");
                }
                write_json(path, &state)?;
                notify_export_success("JSON", path);
            }
            ExportFormat::Csv => {
                let year = year.unwrap_or_else(current_year);
                let rows = write_year_csv(path, &state, year, cfg.show_weekday)?;
                notify_export_success("CSV", path);
                detail(format!("{} days of {}", rows, year));
            }
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {}", format.as_str()),
        );
        Ok(())
    }

    /// Merge a backup document into the database.
    ///
    /// Invalid JSON aborts before anything is written. Fields that are
    /// missing or malformed keep their stored value.
    pub fn import(pool: &mut DbPool, cfg: &Config, file: &str) -> AppResult<()> {
        let text = std::fs::read_to_string(file)?;

        let mut state = load_state(&pool.conn)?;
        let report = import_document(&text, &mut state)?;

        if report.is_empty() {
            warning("No importable fields found in the document.");
        } else {
            save_state(&mut pool.conn, &state)?;
            success(format!("Imported: {}", report.applied.join(", ")));
        }
        if !report.skipped.is_empty() {
            warning(format!("Skipped malformed fields: {}", report.skipped.join(", ")));
        }

        ttlog_quiet(
            &pool.conn,
            "import",
            file,
            &format!(
                "applied [{}] skipped [{}]",
                report.applied.join(","),
                report.skipped.join(",")
            ),
        );

        if !report.is_empty() {
            let projected = ApplyLogic::apply(pool, cfg)?;
            if projected.filled > 0 {
                info(format!("Rotation filled {} new days", projected.filled));
            }
        }
        Ok(())
    }
}
