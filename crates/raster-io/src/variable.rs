//! Named-variable readers for array file formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::error::{RasterIoError, RasterIoResult};

/// Array container formats with named variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayFormat {
    Hdf5,
    NetCdf,
}

impl ArrayFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hdf5 => "hdf5",
            Self::NetCdf => "netcdf",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "h5" | "hdf5" | "he5" => Some(Self::Hdf5),
            "nc" | "nc4" | "netcdf" => Some(Self::NetCdf),
            _ => None,
        }
    }
}

impl FromStr for ArrayFormat {
    type Err = RasterIoError;

    fn from_str(s: &str) -> RasterIoResult<Self> {
        match s.to_lowercase().as_str() {
            "h5" | "hdf5" => Ok(Self::Hdf5),
            "nc" | "netcdf" | "netcdf4" => Ok(Self::NetCdf),
            other => Err(RasterIoError::InvalidFormat(format!(
                "unknown array format '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reads whole named variables from a file as f64 arrays.
///
/// Arrays are returned in the order of `names`. The file is opened and closed
/// within the call.
pub trait VariableReader: Send + Sync {
    fn read_variables(&self, path: &Path, names: &[&str]) -> RasterIoResult<Vec<ArrayD<f64>>>;

    fn format(&self) -> ArrayFormat;
}
