//! Error type for toolkit operations.

use thiserror::Error;

use crate::capabilities::Capability;

/// Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, ToolkitError>;

/// Errors surfaced by the toolkit.
#[derive(Error, Debug)]
pub enum ToolkitError {
    /// An operation needs a collaborator that was not supplied.
    #[error("capability '{0}' is not available; supply it through Toolkit::builder() or enable its cargo feature")]
    CapabilityMissing(Capability),

    #[error(transparent)]
    Time(#[from] altimetry_common::AltimetryError),

    #[error(transparent)]
    Projection(#[from] projection::ProjectionError),

    #[error(transparent)]
    Track(#[from] track_processor::TrackError),

    #[error(transparent)]
    Grid(#[from] grid_processor::GridProcessorError),

    #[error(transparent)]
    RasterIo(#[from] raster_io::RasterIoError),

    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ToolkitError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
