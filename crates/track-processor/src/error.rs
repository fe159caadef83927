//! Error types for along-track processing.

use thiserror::Error;

/// Errors that can occur during along-track processing.
#[derive(Error, Debug, PartialEq)]
pub enum TrackError {
    /// Parallel input arrays differ in length.
    #[error("{left} has {left_len} samples but {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
}

impl TrackError {
    /// Check that two parallel arrays have equal length.
    pub fn check_lengths(
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    ) -> Result<()> {
        if left_len == right_len {
            Ok(())
        } else {
            Err(Self::LengthMismatch {
                left,
                left_len,
                right,
                right_len,
            })
        }
    }
}

/// Result type for track processing operations.
pub type Result<T> = std::result::Result<T, TrackError>;
