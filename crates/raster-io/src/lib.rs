//! Readers for the file formats altimetry workflows consume.
//!
//! - HDF5 datasets (`hdf5` feature), e.g. ICESat-2 ATL06 granules
//! - NetCDF variables (`netcdf` feature), e.g. gridded DEMs and firn models
//! - GeoTIFF band 1 with pixel coordinates (`gdal` feature)
//!
//! The format-independent pieces ([`VariableReader`], [`GeoTiffReader`],
//! [`GeoTransform`]) are always available, so callers can supply their own
//! readers when the C libraries are not installed.

pub mod error;
pub mod geotiff;
pub mod variable;

#[cfg(any(feature = "hdf5", feature = "netcdf"))]
pub mod diagnostics;
#[cfg(feature = "gdal")]
pub mod gdal_reader;
#[cfg(feature = "hdf5")]
pub mod hdf5_reader;
#[cfg(feature = "netcdf")]
pub mod netcdf_reader;

pub use error::{RasterIoError, RasterIoResult};
pub use geotiff::{GeoRaster, GeoTiffReader, GeoTransform, PixelRegistration};
pub use variable::{ArrayFormat, VariableReader};

#[cfg(any(feature = "hdf5", feature = "netcdf"))]
pub use diagnostics::silence_hdf5_errors;
#[cfg(feature = "gdal")]
pub use gdal_reader::GdalGeoTiffReader;
#[cfg(feature = "hdf5")]
pub use hdf5_reader::Hdf5Reader;
#[cfg(feature = "netcdf")]
pub use netcdf_reader::NetCdfReader;
