//! HDF5 dataset reader.

use std::path::Path;

use ndarray::ArrayD;
use tracing::debug;

use crate::diagnostics::silence_hdf5_errors;
use crate::error::{ensure_exists, RasterIoError, RasterIoResult};
use crate::variable::{ArrayFormat, VariableReader};

/// Reads HDF5 datasets by path, e.g. `gt1l/land_ice_segments/h_li`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hdf5Reader;

impl Hdf5Reader {
    pub fn new() -> Self {
        Self
    }
}

impl VariableReader for Hdf5Reader {
    fn read_variables(&self, path: &Path, names: &[&str]) -> RasterIoResult<Vec<ArrayD<f64>>> {
        ensure_exists(path)?;
        silence_hdf5_errors();

        let file = hdf5::File::open(path).map_err(|e| RasterIoError::open(path, e))?;

        let mut arrays = Vec::with_capacity(names.len());
        for &name in names {
            if !file.link_exists(name) {
                return Err(RasterIoError::missing_variable(path, name));
            }

            let dataset = file.dataset(name).map_err(|e| {
                RasterIoError::InvalidFormat(format!("'{}' is not a dataset: {}", name, e))
            })?;
            let values = dataset.read_dyn::<f64>().map_err(|e| {
                RasterIoError::InvalidFormat(format!("Failed to read '{}' as f64: {}", name, e))
            })?;

            debug!(dataset = name, shape = ?values.shape(), "Read HDF5 dataset");
            arrays.push(values);
        }

        Ok(arrays)
    }

    fn format(&self) -> ArrayFormat {
        ArrayFormat::Hdf5
    }
}
