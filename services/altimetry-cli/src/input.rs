//! JSON inputs and list arguments.

use anyhow::{bail, Context, Result};
use ndarray::Array2;
use serde::Deserialize;
use std::path::Path;

/// Along-track samples for `track-type`.
#[derive(Debug, Deserialize)]
pub struct TrackInput {
    pub time: Vec<f64>,
    pub lat: Vec<f64>,
}

/// Regular grid for `interp`. `z` is a list of rows following `yd`.
#[derive(Debug, Deserialize)]
pub struct GridInput {
    pub xd: Vec<f64>,
    pub yd: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

impl GridInput {
    /// Grid values as a `(rows, cols)` array.
    pub fn values(&self) -> Result<Array2<f64>> {
        let rows = self.z.len();
        let cols = self.z.first().map_or(0, Vec::len);
        if let Some((i, row)) = self.z.iter().enumerate().find(|(_, r)| r.len() != cols) {
            bail!("grid row {} has {} values, expected {}", i, row.len(), cols);
        }

        let flat: Vec<f64> = self.z.iter().flatten().copied().collect();
        Array2::from_shape_vec((rows, cols), flat).context("grid values do not form a matrix")
    }
}

/// Read and parse a JSON file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
