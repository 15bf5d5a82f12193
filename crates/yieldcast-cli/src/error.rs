//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// The pipeline could not produce a curve.
    #[error("No data available: {0}")]
    NoData(#[from] yieldcast_core::CurveError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
