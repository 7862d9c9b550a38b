use crate::core::transfer::export_document;
use crate::errors::AppResult;
use crate::models::state::PlannerState;
use std::path::Path;

/// Write the backup document for `state`.
pub fn write_json(path: &Path, state: &PlannerState) -> AppResult<()> {
    let json = export_document(state)?;
    std::fs::write(path, json)?;
    Ok(())
}
