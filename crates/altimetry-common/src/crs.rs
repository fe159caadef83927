//! EPSG coordinate reference system codes used by altimetry workflows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Well-known EPSG codes supported by the reprojection helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpsgCode {
    /// WGS84 Geographic (lon/lat in degrees)
    Epsg4326,
    /// Antarctic Polar Stereographic (meters, true scale at 71°S)
    Epsg3031,
    /// NSIDC Sea Ice Polar Stereographic North (meters, true scale at 70°N)
    Epsg3413,
    /// Web Mercator (meters)
    Epsg3857,
}

impl EpsgCode {
    /// Look up a supported CRS by its numeric EPSG code.
    pub fn from_code(code: u32) -> Result<Self, CrsParseError> {
        match code {
            4326 => Ok(EpsgCode::Epsg4326),
            3031 => Ok(EpsgCode::Epsg3031),
            3413 => Ok(EpsgCode::Epsg3413),
            3857 | 900913 => Ok(EpsgCode::Epsg3857),
            other => Err(CrsParseError::UnsupportedCrs(other.to_string())),
        }
    }

    /// Numeric EPSG code.
    pub fn code(&self) -> u32 {
        match self {
            EpsgCode::Epsg4326 => 4326,
            EpsgCode::Epsg3031 => 3031,
            EpsgCode::Epsg3413 => 3413,
            EpsgCode::Epsg3857 => 3857,
        }
    }

    /// Check if this is a geographic (lon/lat) CRS.
    pub fn is_geographic(&self) -> bool {
        matches!(self, EpsgCode::Epsg4326)
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            EpsgCode::Epsg4326 => "WGS 84",
            EpsgCode::Epsg3031 => "WGS 84 / Antarctic Polar Stereographic",
            EpsgCode::Epsg3413 => "WGS 84 / NSIDC Sea Ice Polar Stereographic North",
            EpsgCode::Epsg3857 => "WGS 84 / Pseudo-Mercator",
        }
    }
}

impl FromStr for EpsgCode {
    type Err = CrsParseError;

    /// Accepts "4326", "EPSG:4326", "epsg:4326" and "+init=EPSG:4326".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        let digits = normalized
            .strip_prefix("+INIT=")
            .unwrap_or(&normalized)
            .trim_start_matches("EPSG:");

        let code: u32 = digits
            .parse()
            .map_err(|_| CrsParseError::UnsupportedCrs(s.to_string()))?;
        Self::from_code(code)
    }
}

impl fmt::Display for EpsgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CrsParseError {
    #[error("Unsupported CRS: {0}")]
    UnsupportedCrs(String),
}
