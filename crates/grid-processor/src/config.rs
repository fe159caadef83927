//! Configuration for grid interpolation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GridProcessorError, Result};
use crate::types::{BoundaryMode, InterpolationOrder, SampleOptions};

/// Interpolation settings applied when a caller does not pass its own options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationConfig {
    /// Interpolation order (nearest or linear).
    pub order: InterpolationOrder,

    /// Boundary mode outside the grid.
    pub mode: BoundaryMode,

    /// Fill value for the constant boundary mode.
    pub cval: f64,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        let options = SampleOptions::default();
        Self {
            order: options.order,
            mode: options.mode,
            cval: options.cval,
        }
    }
}

impl InterpolationConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `ALTIMETRY_INTERP_*` overrides to an existing configuration.
    ///
    /// Unparseable values are logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("ALTIMETRY_INTERP_ORDER") {
            match val.parse() {
                Ok(order) => self.order = order,
                Err(e) => warn!(error = %e, "Ignoring ALTIMETRY_INTERP_ORDER"),
            }
        }

        if let Ok(val) = std::env::var("ALTIMETRY_INTERP_MODE") {
            match val.parse() {
                Ok(mode) => self.mode = mode,
                Err(e) => warn!(error = %e, "Ignoring ALTIMETRY_INTERP_MODE"),
            }
        }

        if let Ok(val) = std::env::var("ALTIMETRY_INTERP_CVAL") {
            match val.parse() {
                Ok(cval) => self.cval = cval,
                Err(_) => warn!(value = %val, "Ignoring ALTIMETRY_INTERP_CVAL"),
            }
        }

        self
    }

    /// Validate the configuration.
    ///
    /// `cval` may be NaN, which marks out-of-grid samples as missing, but not
    /// infinite.
    pub fn validate(&self) -> Result<()> {
        if self.cval.is_infinite() {
            return Err(GridProcessorError::config_error("cval must not be infinite"));
        }
        Ok(())
    }

    /// Sampler options for these settings.
    pub fn sample_options(&self) -> SampleOptions {
        SampleOptions {
            order: self.order,
            mode: self.mode,
            cval: self.cval,
        }
    }
}
