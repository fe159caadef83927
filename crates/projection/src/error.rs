//! Error types for coordinate transformations.

use altimetry_common::CrsParseError;
use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while reprojecting coordinates.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// The EPSG code is not one of the supported projections
    #[error("unsupported CRS: {0}")]
    UnsupportedCrs(String),

    /// Coordinate arrays differ in length
    #[error("coordinate arrays differ in length: x has {x}, y has {y}")]
    LengthMismatch { x: usize, y: usize },
}

impl From<CrsParseError> for ProjectionError {
    fn from(err: CrsParseError) -> Self {
        match err {
            CrsParseError::UnsupportedCrs(code) => Self::UnsupportedCrs(code),
        }
    }
}
