//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so a command either
//! succeeds or ends with one message on stderr.

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
    #[error(
        "Cannot connect to the database at '{path}'. Check the network connection or adjust the configuration. ({source})"
    )]
    Connect {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("No record with id {0}")]
    RecordNotFound(i64),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid SIN '{0}': SIN must be exactly 4 letters followed by 4 digits")]
    InvalidSin(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("End of assistance ({end}) may not be before its start ({start})")]
    InvalidRange { start: String, end: String },

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file is not valid YAML: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Compression error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Validation problems are the operator's to fix; everything else is
    /// reported as a database or system failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidSin(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidRange { .. }
                | AppError::InvalidType(_)
                | AppError::Validation(_)
                | AppError::RecordNotFound(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
