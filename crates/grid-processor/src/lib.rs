//! Regular-grid interpolation.
//!
//! Samples a 2D grid with 1D coordinate axes at arbitrary map coordinates.
//! Query coordinates are converted to fractional indices and handed to an
//! index-space sampler that supports nearest and bilinear interpolation with
//! several boundary extensions.
//!
//! # Example
//!
//! ```
//! use grid_processor::{BoundaryMode, RegularGrid, SampleOptions};
//! use ndarray::array;
//!
//! let grid = RegularGrid::new(
//!     vec![0.0, 100.0],
//!     vec![0.0, 100.0],
//!     array![[1.0, 2.0], [3.0, 4.0]],
//! )
//! .unwrap();
//!
//! let options = SampleOptions::default().with_mode(BoundaryMode::Nearest);
//! let zq = grid.sample(&250.0.into(), &0.0.into(), &options).unwrap();
//! assert_eq!(zq, vec![2.0]);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod sampler;
pub mod types;

pub use config::InterpolationConfig;
pub use error::{GridProcessorError, Result};
pub use grid::{interp2d, RegularGrid};
pub use sampler::{extend_index, map_coordinates, sample_point};
pub use types::{broadcast, BoundaryMode, InterpolationOrder, QueryAxis, SampleOptions};
