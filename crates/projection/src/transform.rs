//! Reprojection between EPSG coordinate reference systems.

use altimetry_common::EpsgCode;
use tracing::debug;

use crate::error::{ProjectionError, ProjectionResult};
use crate::geographic::Geographic;
use crate::mercator::WebMercator;
use crate::polar::PolarStereographic;

/// A map projection between geographic (lon, lat) degrees and plane coordinates.
pub trait MapProjection: Send + Sync {
    /// Geographic (lon, lat) to projected (x, y).
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Projected (x, y) to geographic (lon, lat).
    fn inverse(&self, x: f64, y: f64) -> (f64, f64);
}

/// Build the projection for a supported EPSG code.
pub fn projection_for(code: EpsgCode) -> Box<dyn MapProjection> {
    match code {
        EpsgCode::Epsg4326 => Box::new(Geographic),
        EpsgCode::Epsg3031 => Box::new(PolarStereographic::epsg3031()),
        EpsgCode::Epsg3413 => Box::new(PolarStereographic::epsg3413()),
        EpsgCode::Epsg3857 => Box::new(WebMercator::default()),
    }
}

/// Transform coordinates from `proj1` to `proj2` (EPSG numbers).
///
/// Common codes:
/// - Geodetic (lon/lat): 4326
/// - Polar Stereo Antarctica (x/y): 3031
/// - Polar Stereo Greenland (x/y): 3413
///
/// Points the target projection cannot represent come back as NaN.
pub fn transform_coord(
    proj1: u32,
    proj2: u32,
    x: &[f64],
    y: &[f64],
) -> ProjectionResult<(Vec<f64>, Vec<f64>)> {
    let from = EpsgCode::from_code(proj1)?;
    let to = EpsgCode::from_code(proj2)?;
    NativeReprojector.transform(from, to, x, y)
}

/// Seam for reprojection backends.
pub trait Reprojector: Send + Sync {
    /// Transform parallel coordinate arrays from `from` to `to`.
    fn transform(
        &self,
        from: EpsgCode,
        to: EpsgCode,
        x: &[f64],
        y: &[f64],
    ) -> ProjectionResult<(Vec<f64>, Vec<f64>)>;

    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Reprojector using the projections implemented in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeReprojector;

impl Reprojector for NativeReprojector {
    fn transform(
        &self,
        from: EpsgCode,
        to: EpsgCode,
        x: &[f64],
        y: &[f64],
    ) -> ProjectionResult<(Vec<f64>, Vec<f64>)> {
        if x.len() != y.len() {
            return Err(ProjectionError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        debug!(from = %from, to = %to, points = x.len(), "Transforming coordinates");

        if from == to {
            return Ok((x.to_vec(), y.to_vec()));
        }

        let src = projection_for(from);
        let dst = projection_for(to);

        Ok(x.iter()
            .zip(y)
            .map(|(&xi, &yi)| {
                let (lon, lat) = src.inverse(xi, yi);
                dst.forward(lon, lat)
            })
            .unzip())
    }

    fn name(&self) -> &'static str {
        "native"
    }
}
