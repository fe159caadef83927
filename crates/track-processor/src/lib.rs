//! Along-track processing for satellite altimetry.
//!
//! - [`track_type`] splits a pass at its latitude extremum and labels each
//!   part ascending or descending.
//! - [`seg_diff_filter`] flags land-ice segments whose height disagrees with
//!   the along-track slope of their neighbours.
//!
//! # Example
//!
//! ```
//! use track_processor::track_type;
//!
//! let time = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let lat = [-80.0, -82.0, -85.0, -83.0, -81.0];
//!
//! let masks = track_type(&time, &lat, 1.0).unwrap();
//! assert_eq!(masks.ascending, vec![false, false, true, true, true]);
//! ```

pub mod error;
pub mod filter;
pub mod track;

pub use error::{Result, TrackError};
pub use filter::{seg_diff_filter, SegmentDiffFilter, SEGMENT_SPACING_M};
pub use track::{split_at_extremum, track_type, TrackClassifier, TrackMasks};
