//! Common types and utilities shared across the altimetry-kit crates.

pub mod crs;
pub mod error;
pub mod files;
pub mod time;

pub use crs::{CrsParseError, EpsgCode};
pub use error::{AltimetryError, AltimetryResult};
pub use files::{list_files, DEFAULT_SUFFIX};
pub use time::{gps_to_decimal_year, gps_to_decimal_years, gps_to_utc};
