//! Error types for raster and array reading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for raster-io operations.
pub type RasterIoResult<T> = Result<T, RasterIoError>;

/// Error types for file readers.
#[derive(Error, Debug)]
pub enum RasterIoError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but the format library could not open it
    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// Named variable or dataset is not in the file
    #[error("Variable '{name}' not found in {path}")]
    MissingVariable { path: PathBuf, name: String },

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Pixel registration code other than "A" or "P"
    #[error("Unknown pixel registration '{0}' (expected \"A\" or \"P\")")]
    UnknownRegistration(String),
}

impl RasterIoError {
    pub fn open(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn missing_variable(path: &Path, name: &str) -> Self {
        Self::MissingVariable {
            path: path.to_path_buf(),
            name: name.to_string(),
        }
    }
}

/// Fail with an I/O error when `path` does not exist.
pub(crate) fn ensure_exists(path: &Path) -> RasterIoResult<()> {
    std::fs::metadata(path)?;
    Ok(())
}
