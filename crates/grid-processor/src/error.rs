//! Error types for grid interpolation.

use thiserror::Error;

/// Errors that can occur during grid interpolation.
#[derive(Error, Debug, PartialEq)]
pub enum GridProcessorError {
    /// Grid values do not match the coordinate axes.
    #[error("grid shape {actual:?} does not match axes (len(yd), len(xd)) = {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// An axis has fewer than two points.
    #[error("axis {axis} has {len} point(s); at least 2 are required")]
    DegenerateAxis { axis: &'static str, len: usize },

    /// An axis is not strictly monotonic.
    #[error("axis {axis} is not strictly increasing after normalization")]
    NonMonotonicAxis { axis: &'static str },

    /// Query coordinate sequences differ in length.
    #[error("query sequences differ in length: xq has {x}, yq has {y}")]
    QueryLengthMismatch { x: usize, y: usize },

    /// Unrecognised sampling option.
    #[error("invalid sampling option: {0}")]
    InvalidOption(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl GridProcessorError {
    /// Create an InvalidOption error.
    pub fn invalid_option(msg: impl Into<String>) -> Self {
        Self::InvalidOption(msg.into())
    }

    /// Create a ConfigError.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Result type for grid processor operations.
pub type Result<T> = std::result::Result<T, GridProcessorError>;
