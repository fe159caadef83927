//! Toolkit configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. An optional YAML file, with `${VAR}` and `${VAR:-default}` substitution
//! 3. `ALTIMETRY_*` environment variables

use std::fs;
use std::path::Path;

use altimetry_common::DEFAULT_SUFFIX;
use grid_processor::InterpolationConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, ToolkitError};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub logging: LoggingConfig,
    pub files: FilesConfig,
    pub tracks: TracksConfig,
    pub interpolation: InterpolationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON log lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// File-name suffix used by `list_files` when none is given
    pub suffix: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracksConfig {
    /// Time gap reported as a track break by `track_type`
    pub gap_threshold: f64,
    /// Largest accepted end-point mismatch for `seg_diff_filter` (meters)
    pub seg_diff_tolerance: f64,
}

impl Default for TracksConfig {
    fn default() -> Self {
        Self {
            gap_threshold: 1.0,
            seg_diff_tolerance: 2.0,
        }
    }
}

impl ToolkitConfig {
    /// Load a YAML file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ToolkitError::config(format!("Failed to read config from {:?}: {}", path, e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML content after environment variable expansion.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content)?;
        serde_yaml::from_str(&expanded)
            .map_err(|e| ToolkitError::config(format!("Failed to parse config YAML: {}", e)))
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `ALTIMETRY_*` environment overrides.
    ///
    /// Unparseable values are logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("ALTIMETRY_LOG_LEVEL") {
            self.logging.level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("ALTIMETRY_LOG_JSON") {
            self.logging.json = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("ALTIMETRY_FILE_SUFFIX") {
            self.files.suffix = val;
        }

        if let Ok(val) = std::env::var("ALTIMETRY_TRACK_TMAX") {
            match val.parse() {
                Ok(tmax) => self.tracks.gap_threshold = tmax,
                Err(_) => warn!(value = %val, "Ignoring ALTIMETRY_TRACK_TMAX"),
            }
        }

        if let Ok(val) = std::env::var("ALTIMETRY_SEG_DIFF_TOL") {
            match val.parse() {
                Ok(tol) => self.tracks.seg_diff_tolerance = tol,
                Err(_) => warn!(value = %val, "Ignoring ALTIMETRY_SEG_DIFF_TOL"),
            }
        }

        self.interpolation = self.interpolation.with_env_overrides();
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ToolkitError::config(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level, VALID_LOG_LEVELS
            )));
        }

        check_positive("tracks.gap_threshold", self.tracks.gap_threshold)?;
        check_positive("tracks.seg_diff_tolerance", self.tracks.seg_diff_tolerance)?;

        self.interpolation
            .validate()
            .map_err(|e| ToolkitError::config(e.to_string()))
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ToolkitError::config(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}

/// Expand `${VAR}` and `${VAR:-default}` in YAML content.
fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next();

            let mut var_expr = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(c) => var_expr.push(c),
                    None => {
                        return Err(ToolkitError::config(format!(
                            "Unclosed variable substitution: ${{{}",
                            var_expr
                        )))
                    }
                }
            }

            result.push_str(&resolve_var_expr(&var_expr)?);
        } else {
            result.push(ch);
        }
    }

    Ok(result)
}

fn resolve_var_expr(expr: &str) -> Result<String> {
    if let Some((var_name, default)) = expr.split_once(":-") {
        match std::env::var(var_name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        std::env::var(expr.trim())
            .map_err(|_| ToolkitError::config(format!("Environment variable {} not set", expr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_processor::{BoundaryMode, InterpolationOrder};

    #[test]
    fn test_defaults_validate() {
        let config = ToolkitConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.files.suffix, ".h5");
        assert_eq!(config.tracks.gap_threshold, 1.0);
        assert_eq!(config.tracks.seg_diff_tolerance, 2.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ToolkitConfig::from_yaml_str(
            "tracks:\n  seg_diff_tolerance: 0.5\ninterpolation:\n  order: nearest\n  mode: reflect\n",
        )
        .unwrap();

        assert_eq!(config.tracks.seg_diff_tolerance, 0.5);
        assert_eq!(config.tracks.gap_threshold, 1.0);
        assert_eq!(config.interpolation.order, InterpolationOrder::Nearest);
        assert_eq!(config.interpolation.mode, BoundaryMode::Reflect);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_yaml_env_substitution() {
        std::env::set_var("ALTIMETRY_TEST_SUFFIX", ".nc");
        std::env::remove_var("ALTIMETRY_TEST_UNSET");
        let config = ToolkitConfig::from_yaml_str(
            "files:\n  suffix: \"${ALTIMETRY_TEST_SUFFIX}\"\nlogging:\n  level: ${ALTIMETRY_TEST_UNSET:-debug}\n",
        )
        .unwrap();

        assert_eq!(config.files.suffix, ".nc");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_unclosed_substitution() {
        assert!(expand_env_vars("level: ${LEVEL").is_err());
    }

    #[test]
    fn test_missing_required_var() {
        std::env::remove_var("ALTIMETRY_TEST_REQUIRED");
        assert!(expand_env_vars("${ALTIMETRY_TEST_REQUIRED}").is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ToolkitConfig::from_yaml_str("tracks: [1, 2").unwrap_err();
        assert!(matches!(err, ToolkitError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let mut config = ToolkitConfig::default();
        config.tracks.gap_threshold = 0.0;
        assert!(config.validate().is_err());

        let mut config = ToolkitConfig::default();
        config.tracks.seg_diff_tolerance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = ToolkitConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }
}
