//! Altimetry helpers behind one facade.
//!
//! [`Toolkit`] bundles the time, track, grid, reprojection and file-reading
//! helpers. Reprojection and the file readers are supplied as collaborators,
//! so a build without the HDF5, NetCDF or GDAL C libraries still offers every
//! other operation.
//!
//! # Example
//!
//! ```
//! use toolkit::{Capability, Toolkit, ToolkitConfig, ToolkitError};
//!
//! let toolkit = Toolkit::with_default_capabilities(ToolkitConfig::default());
//!
//! let (x, y) = toolkit.transform_coord(4326, 3031, &[0.0], &[-90.0]).unwrap();
//! assert!(x[0].abs() < 1e-6 && y[0].abs() < 1e-6);
//!
//! // A toolkit built without collaborators reports what is missing.
//! let bare = Toolkit::builder().build();
//! let err = bare.transform_coord(4326, 3031, &[0.0], &[-90.0]).unwrap_err();
//! assert!(matches!(err, ToolkitError::CapabilityMissing(Capability::Reprojection)));
//! ```

pub mod capabilities;
pub mod config;
pub mod error;
pub mod toolkit;

pub use capabilities::Capability;
pub use config::{FilesConfig, LoggingConfig, ToolkitConfig, TracksConfig};
pub use error::{Result, ToolkitError};
pub use toolkit::{Toolkit, ToolkitBuilder};

// Types that appear in the toolkit's signatures
pub use grid_processor::{
    BoundaryMode, InterpolationConfig, InterpolationOrder, QueryAxis, SampleOptions,
};
pub use raster_io::{
    ArrayFormat, GeoRaster, GeoTiffReader, GeoTransform, PixelRegistration, VariableReader,
};
pub use projection::Reprojector;
pub use track_processor::TrackMasks;
