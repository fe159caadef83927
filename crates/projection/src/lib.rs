//! Coordinate reference system transformations.
//!
//! Implements the map projections used for polar altimetry from scratch without
//! external dependencies. Geographic coordinates are always (lon, lat) in
//! degrees; projected coordinates are (x, y) in meters.

pub mod ellipsoid;
pub mod error;
pub mod geographic;
pub mod mercator;
pub mod polar;
pub mod transform;

pub use ellipsoid::Ellipsoid;
pub use error::{ProjectionError, ProjectionResult};
pub use geographic::Geographic;
pub use mercator::WebMercator;
pub use polar::PolarStereographic;
pub use transform::{projection_for, transform_coord, MapProjection, NativeReprojector, Reprojector};
