//! Error types for the common helpers.

use thiserror::Error;

/// Result type alias using AltimetryError.
pub type AltimetryResult<T> = Result<T, AltimetryError>;

/// Errors raised by the shared time and filesystem helpers.
#[derive(Debug, Error)]
pub enum AltimetryError {
    #[error("Invalid time value: {0}")]
    InvalidTime(String),

    #[error("Invalid CRS: {0}")]
    InvalidCrs(#[from] crate::crs::CrsParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
