//! Optional collaborators a toolkit may hold.

use std::fmt;

use raster_io::ArrayFormat;
use serde::{Deserialize, Serialize};

/// A replaceable backend behind one or more toolkit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Coordinate transformation (`transform_coord`)
    Reprojection,
    /// HDF5 dataset reading (`h5read`)
    Hdf5,
    /// NetCDF variable reading (`ncread`)
    NetCdf,
    /// GeoTIFF reading (`tifread`)
    GeoTiff,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reprojection => "reprojection",
            Self::Hdf5 => "hdf5",
            Self::NetCdf => "netcdf",
            Self::GeoTiff => "geotiff",
        }
    }
}

impl From<ArrayFormat> for Capability {
    fn from(format: ArrayFormat) -> Self {
        match format {
            ArrayFormat::Hdf5 => Self::Hdf5,
            ArrayFormat::NetCdf => Self::NetCdf,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
