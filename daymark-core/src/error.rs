//! Error types for daymark.

use thiserror::Error;

/// Errors that can occur in daymark operations.
#[derive(Error, Debug)]
pub enum DaymarkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),
}

/// Result type alias for daymark operations.
pub type DaymarkResult<T> = Result<T, DaymarkError>;
