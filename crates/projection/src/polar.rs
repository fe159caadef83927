//! Ellipsoidal polar stereographic projection.
//!
//! Used by the polar ice-sheet grids: EPSG:3031 (Antarctica, true scale at
//! 71°S) and EPSG:3413 (Arctic, true scale at 70°N). This is "variant B" of
//! the EPSG guidance note, parameterised by the latitude of true scale rather
//! than a scale factor at the pole.
//!
//! The south-pole aspect is evaluated through the north-pole formulas by
//! negating latitude and longitude on the way in and the plane coordinates on
//! the way out.
//!
//! Reference: Snyder, Map Projections - A Working Manual (1987), pp. 160-164

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::ellipsoid::Ellipsoid;
use crate::transform::MapProjection;

/// Convergence tolerance for the inverse latitude iteration (radians).
const INVERSE_TOLERANCE: f64 = 1e-12;
const MAX_ITERATIONS: usize = 15;

/// Polar stereographic projection parameters.
#[derive(Debug, Clone)]
pub struct PolarStereographic {
    /// Latitude of true scale in degrees (negative for the south-pole aspect)
    pub lat_ts: f64,
    /// Central meridian (straight down from the pole) in degrees
    pub lon0: f64,
    /// Reference ellipsoid
    pub ellipsoid: Ellipsoid,
    south: bool,
    e: f64,
    /// a * m_c / t_c, the radius scale shared by forward and inverse
    rho_scale: f64,
}

impl PolarStereographic {
    /// Create a projection from its latitude of true scale and central meridian.
    pub fn new(lat_ts_deg: f64, lon0_deg: f64, ellipsoid: Ellipsoid) -> Self {
        let south = lat_ts_deg < 0.0;
        let e = ellipsoid.e();
        let phi_c = lat_ts_deg.abs().to_radians();

        let rho_scale = if (FRAC_PI_2 - phi_c).abs() < 1e-10 {
            // True scale at the pole itself (k0 = 1)
            2.0 * ellipsoid.a / ((1.0 + e).powf(1.0 + e) * (1.0 - e).powf(1.0 - e)).sqrt()
        } else {
            let mc = phi_c.cos() / (1.0 - e * e * phi_c.sin().powi(2)).sqrt();
            ellipsoid.a * mc / conformal_t(phi_c, e)
        };

        Self {
            lat_ts: lat_ts_deg,
            lon0: lon0_deg,
            ellipsoid,
            south,
            e,
            rho_scale,
        }
    }

    /// EPSG:3031, WGS 84 / Antarctic Polar Stereographic.
    pub fn epsg3031() -> Self {
        Self::new(-71.0, 0.0, Ellipsoid::WGS84)
    }

    /// EPSG:3413, WGS 84 / NSIDC Sea Ice Polar Stereographic North.
    pub fn epsg3413() -> Self {
        Self::new(70.0, -45.0, Ellipsoid::WGS84)
    }

    /// Whether this is the south-pole aspect.
    pub fn is_south(&self) -> bool {
        self.south
    }

    /// Point scale factor at geographic latitude `lat` (degrees).
    ///
    /// Equals 1 at the latitude of true scale.
    pub fn scale_factor(&self, lat: f64) -> f64 {
        let phi = if self.south { -lat } else { lat }.to_radians();
        let e = self.e;
        let m = phi.cos() / (1.0 - e * e * phi.sin().powi(2)).sqrt();
        let rho = self.rho_scale * conformal_t(phi, e);
        rho / (self.ellipsoid.a * m)
    }

    fn hemisphere_sign(&self) -> f64 {
        if self.south {
            -1.0
        } else {
            1.0
        }
    }
}

/// Snyder's t(φ) for the north-pole aspect.
fn conformal_t(phi: f64, e: f64) -> f64 {
    let es = e * phi.sin();
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - es) / (1.0 + es)).powf(e / 2.0)
}

/// Wrap a longitude in radians into `[-π, π]`.
fn normalize_lon(lon: f64) -> f64 {
    (lon + PI).rem_euclid(2.0 * PI) - PI
}

impl MapProjection for PolarStereographic {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        if !lon.is_finite() || !lat.is_finite() {
            return (f64::NAN, f64::NAN);
        }

        let s = self.hemisphere_sign();
        let phi = (s * lat).to_radians();

        // The opposite pole has no finite image.
        if phi <= -FRAC_PI_2 {
            return (f64::NAN, f64::NAN);
        }

        let dlon = normalize_lon((s * lon).to_radians() - (s * self.lon0).to_radians());
        let rho = self.rho_scale * conformal_t(phi, self.e);

        let x = rho * dlon.sin();
        let y = -rho * dlon.cos();
        (s * x, s * y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let s = self.hemisphere_sign();
        let (x, y) = (s * x, s * y);

        let rho = x.hypot(y);
        let t = rho / self.rho_scale;
        let e = self.e;

        let mut phi = FRAC_PI_2 - 2.0 * t.atan();
        for _ in 0..MAX_ITERATIONS {
            let es = e * phi.sin();
            let next = FRAC_PI_2 - 2.0 * (t * ((1.0 - es) / (1.0 + es)).powf(e / 2.0)).atan();
            let converged = (next - phi).abs() < INVERSE_TOLERANCE;
            phi = next;
            if converged {
                break;
            }
        }

        let lam = normalize_lon((s * self.lon0).to_radians() + x.atan2(-y));
        (s * lam.to_degrees(), s * phi.to_degrees())
    }
}
