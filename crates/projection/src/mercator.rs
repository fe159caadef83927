//! Spherical (web) Mercator projection, EPSG:3857.

use std::f64::consts::FRAC_PI_4;

use crate::ellipsoid::Ellipsoid;
use crate::transform::MapProjection;

/// Web Mercator on a sphere with the WGS84 semi-major axis.
#[derive(Debug, Clone, Copy)]
pub struct WebMercator {
    pub radius: f64,
}

impl Default for WebMercator {
    fn default() -> Self {
        Self {
            radius: Ellipsoid::WGS84.a,
        }
    }
}

impl MapProjection for WebMercator {
    /// The poles map to infinity and come back as NaN, as do non-finite inputs.
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        if !lon.is_finite() || !lat.is_finite() || lat.abs() >= 90.0 {
            return (f64::NAN, f64::NAN);
        }
        let x = self.radius * lon.to_radians();
        let y = self.radius * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = (x / self.radius).to_degrees();
        let lat = (2.0 * (y / self.radius).exp().atan() - 2.0 * FRAC_PI_4).to_degrees();
        (lon, lat)
    }
}
