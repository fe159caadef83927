//! Georeferenced single-band rasters.
//!
//! A GDAL geotransform maps pixel indices to map coordinates:
//!
//! ```text
//! X = t0 + col * t1 + row * t2
//! Y = t3 + col * t4 + row * t5
//! ```
//!
//! Area-registered rasters report pixel centres, point-registered rasters
//! report the pixel corner.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{RasterIoError, RasterIoResult};

/// How pixel values relate to the geotransform grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelRegistration {
    /// Values represent pixel areas; coordinates are pixel centres.
    #[default]
    Area,
    /// Values represent points at the pixel corners.
    Point,
}

impl PixelRegistration {
    /// Parse the one-letter registration code ("A" or "P").
    pub fn from_code(code: &str) -> RasterIoResult<Self> {
        match code.trim() {
            "A" | "a" => Ok(Self::Area),
            "P" | "p" => Ok(Self::Point),
            other => Err(RasterIoError::UnknownRegistration(other.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Area => "A",
            Self::Point => "P",
        }
    }

    fn offset(&self) -> f64 {
        match self {
            Self::Area => 0.5,
            Self::Point => 0.0,
        }
    }
}

impl FromStr for PixelRegistration {
    type Err = RasterIoError;

    fn from_str(s: &str) -> RasterIoResult<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for PixelRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Six-coefficient affine geotransform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform(pub [f64; 6]);

impl From<[f64; 6]> for GeoTransform {
    fn from(t: [f64; 6]) -> Self {
        Self(t)
    }
}

impl GeoTransform {
    /// North-up transform with the top-left corner at `(x0, y0)`.
    pub fn north_up(x0: f64, y0: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self([x0, pixel_width, 0.0, y0, 0.0, -pixel_height.abs()])
    }

    /// Pixel width (always positive).
    pub fn dx(&self) -> f64 {
        self.0[1].abs()
    }

    /// Pixel height (always positive).
    pub fn dy(&self) -> f64 {
        self.0[5].abs()
    }

    /// Map coordinate of a fractional pixel position.
    pub fn apply(&self, col: f64, row: f64) -> (f64, f64) {
        let t = &self.0;
        (
            t[0] + col * t[1] + row * t[2],
            t[3] + col * t[4] + row * t[5],
        )
    }

    /// Coordinate arrays of shape `(ny, nx)` for every pixel.
    pub fn pixel_coordinates(
        &self,
        nx: usize,
        ny: usize,
        registration: PixelRegistration,
    ) -> (Array2<f64>, Array2<f64>) {
        let o = registration.offset();
        let x = Array2::from_shape_fn((ny, nx), |(j, i)| self.apply(i as f64 + o, j as f64 + o).0);
        let y = Array2::from_shape_fn((ny, nx), |(j, i)| self.apply(i as f64 + o, j as f64 + o).1);
        (x, y)
    }
}

/// Band 1 of a GeoTIFF with its pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRaster {
    /// X coordinate of every pixel
    pub x: Array2<f64>,
    /// Y coordinate of every pixel
    pub y: Array2<f64>,
    /// Band values, indexed `[row, col]`
    pub z: Array2<f64>,
    pub dx: f64,
    pub dy: f64,
    /// Projection as WKT
    pub projection: String,
    pub transform: GeoTransform,
    /// Declared no-data value, if any. Values are not masked.
    pub nodata: Option<f64>,
}

impl GeoRaster {
    /// Assemble a raster from band values and a geotransform.
    pub fn from_band(
        z: Array2<f64>,
        transform: GeoTransform,
        registration: PixelRegistration,
        projection: String,
        nodata: Option<f64>,
    ) -> Self {
        let (ny, nx) = z.dim();
        let (x, y) = transform.pixel_coordinates(nx, ny, registration);
        Self {
            x,
            y,
            z,
            dx: transform.dx(),
            dy: transform.dy(),
            projection,
            transform,
            nodata,
        }
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.z.dim()
    }
}

/// Reads a single-band GeoTIFF.
pub trait GeoTiffReader: Send + Sync {
    fn read_geotiff(
        &self,
        path: &Path,
        registration: PixelRegistration,
    ) -> RasterIoResult<GeoRaster>;
}
