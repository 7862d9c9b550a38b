use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{colors_enabled, info};
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "apply" | "rotation_set" | "import" => GREEN,
        "shift_del" | "day_clear" | "holiday_del" | "rotation_clear" => RED,
        "migration_applied" | "init" => CYAN,
        other if other.ends_with("_edit") || other.starts_with("holiday_") => YELLOW,
        _ => "",
    }
}

const MAX_OP_WIDTH: usize = 40;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let mut op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                if op_target.chars().count() > MAX_OP_WIDTH {
                    op_target = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                    op_target.push_str("...");
                }
                (e.id.to_string(), date, op_target)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, (id, date, op_target)) in entries.iter().zip(rows) {
            let padded = format!("{:<op_w$}", op_target, op_w = op_w);
            let color = color_for_operation(&entry.operation);
            let shown = if colors_enabled() && !color.is_empty() {
                format!("{color}{padded}{RESET}")
            } else {
                padded
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                id,
                date,
                shown,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
