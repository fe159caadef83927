//! Reference ellipsoids.

/// An oblate reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub a: f64,
    /// Inverse flattening
    pub inv_f: f64,
}

impl Ellipsoid {
    /// WGS84, used by every supported EPSG code.
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6378137.0,
        inv_f: 298.257223563,
    };

    /// Flattening.
    pub fn f(&self) -> f64 {
        1.0 / self.inv_f
    }

    /// First eccentricity squared.
    pub fn e2(&self) -> f64 {
        let f = self.f();
        f * (2.0 - f)
    }

    /// First eccentricity.
    pub fn e(&self) -> f64 {
        self.e2().sqrt()
    }

    /// Meridional radius of curvature at geodetic latitude `lat` (radians).
    pub fn meridional_radius(&self, lat: f64) -> f64 {
        let e2 = self.e2();
        self.a * (1.0 - e2) / (1.0 - e2 * lat.sin().powi(2)).powf(1.5)
    }
}
