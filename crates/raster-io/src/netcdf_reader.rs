//! NetCDF variable reader.
//!
//! Values are unpacked the way CF-aware readers present them: samples equal to
//! `_FillValue` or `missing_value` become NaN, and the rest are scaled by
//! `scale_factor` and shifted by `add_offset` when those attributes exist.

use std::path::Path;

use ndarray::{ArrayD, IxDyn};
use tracing::debug;

use crate::diagnostics::silence_hdf5_errors;
use crate::error::{ensure_exists, RasterIoError, RasterIoResult};
use crate::variable::{ArrayFormat, VariableReader};

/// Reads NetCDF (classic or NetCDF-4) variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetCdfReader;

impl NetCdfReader {
    pub fn new() -> Self {
        Self
    }
}

impl VariableReader for NetCdfReader {
    fn read_variables(&self, path: &Path, names: &[&str]) -> RasterIoResult<Vec<ArrayD<f64>>> {
        ensure_exists(path)?;
        silence_hdf5_errors();

        let file = netcdf::open(path).map_err(|e| RasterIoError::open(path, e))?;

        let mut arrays = Vec::with_capacity(names.len());
        for &name in names {
            let var = file
                .variable(name)
                .ok_or_else(|| RasterIoError::missing_variable(path, name))?;
            arrays.push(read_unpacked(&var, name)?);
        }

        Ok(arrays)
    }

    fn format(&self) -> ArrayFormat {
        ArrayFormat::NetCdf
    }
}

fn read_unpacked(var: &netcdf::Variable, name: &str) -> RasterIoResult<ArrayD<f64>> {
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();

    let raw: Vec<f64> = var
        .get_values(..)
        .map_err(|e| RasterIoError::InvalidFormat(format!("Failed to read {}: {}", name, e)))?;

    let scale_factor = get_f64_attr(var, "scale_factor").unwrap_or(1.0);
    let add_offset = get_f64_attr(var, "add_offset").unwrap_or(0.0);
    let fill_value = get_f64_attr(var, "_FillValue");
    let missing_value = get_f64_attr(var, "missing_value");

    let mut masked = 0usize;
    let values: Vec<f64> = raw
        .into_iter()
        .map(|v| {
            if Some(v) == fill_value || Some(v) == missing_value {
                masked += 1;
                f64::NAN
            } else {
                v * scale_factor + add_offset
            }
        })
        .collect();

    debug!(
        variable = name,
        shape = ?shape,
        masked,
        scale_factor,
        add_offset,
        "Read NetCDF variable"
    );

    ArrayD::from_shape_vec(IxDyn(&shape), values)
        .map_err(|e| RasterIoError::InvalidFormat(format!("Bad shape for {}: {}", name, e)))
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

fn get_f64_attr(var: &netcdf::Variable, name: &str) -> Option<f64> {
    if !has_attr(var, name) {
        return None;
    }
    let attr_value = var.attribute_value(name)?.ok()?;
    f64::try_from(attr_value).ok()
}
