//! Ledger input error types.

use ledgerview_shared::AppError;
use thiserror::Error;

/// Errors that can occur while reading ledger entries.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be parsed.
    #[error("Invalid JSON ledger: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV input could not be parsed.
    #[error("Invalid CSV ledger: {0}")]
    Csv(#[from] csv::Error),

    /// File extension does not map to a known reader.
    #[error("Unsupported ledger format: {0}")]
    UnsupportedFormat(String),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Io(e) => Self::Input(e.to_string()),
            LedgerError::UnsupportedFormat(ext) => Self::UnsupportedFormat(ext),
            e @ (LedgerError::Json(_) | LedgerError::Csv(_)) => Self::Validation(e.to_string()),
        }
    }
}
