//! Geographic (lon/lat) pseudo-projection.

use crate::transform::MapProjection;

/// WGS84 geographic coordinates: x = longitude, y = latitude, in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geographic;

impl MapProjection for Geographic {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        (lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }
}
