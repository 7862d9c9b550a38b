//! Unified application error type.
//! The storage, transfer and CLI layers return AppError. The schedule
//! engine itself never fails: bad input degrades to "no assignment".

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    // ---------------------------
    // Catalog errors
    // ---------------------------
    #[error("Unknown shift id: {0}")]
    UnknownShift(String),

    #[error("Shift id already exists: {0}")]
    DuplicateShift(String),

    #[error("Invalid shift id: {0:?}")]
    InvalidShiftId(String),

    #[error("Invalid color (expected #rrggbb): {0:?}")]
    InvalidColor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
