//! Subcommand implementations. Each returns the text written to stdout.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use toolkit::{ArrayFormat, PixelRegistration, QueryAxis, Toolkit};
use tracing::info;

use crate::input::{read_json, GridInput, TrackInput};

pub fn gps2dyr(toolkit: &Toolkit, times: &[f64]) -> Result<String> {
    let years = toolkit.gps2dyr(times)?;
    Ok(years
        .iter()
        .map(|y| format!("{:.10}", y))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn list_files(toolkit: &Toolkit, dir: &Path, suffix: Option<&str>) -> Result<String> {
    let files = toolkit.list_files(dir, suffix);
    info!(count = files.len(), dir = %dir.display(), "Listed files");
    Ok(files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn transform(toolkit: &Toolkit, from: u32, to: u32, x: &[f64], y: &[f64]) -> Result<String> {
    let (xt, yt) = toolkit.transform_coord(from, to, x, y)?;
    Ok(json!({ "x": xt, "y": yt }).to_string())
}

pub fn track_type(toolkit: &Toolkit, input: &Path, tmax: Option<f64>) -> Result<String> {
    let track: TrackInput = read_json(input)?;
    let masks = toolkit.track_type(&track.time, &track.lat, tmax)?;
    Ok(serde_json::to_string(&masks)?)
}

pub fn interp(toolkit: &Toolkit, grid: &Path, x: Vec<f64>, y: Vec<f64>) -> Result<String> {
    let grid: GridInput = read_json(grid)?;
    let z = grid.values()?;
    let zq = toolkit.interp2d(&grid.xd, &grid.yd, z.view(), query_axis(x), query_axis(y), None)?;
    Ok(serde_json::to_string(&zq)?)
}

pub fn read(
    toolkit: &Toolkit,
    format: ArrayFormat,
    file: &Path,
    variables: &[String],
) -> Result<String> {
    let names: Vec<&str> = variables.iter().map(String::as_str).collect();
    let arrays = toolkit
        .read_variables(format, file, &names)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    Ok(names
        .iter()
        .zip(&arrays)
        .map(|(name, array)| format!("{}: {:?}", name, array.shape()))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn tifread(toolkit: &Toolkit, file: &Path, registration: PixelRegistration) -> Result<String> {
    let raster = toolkit
        .tifread(file, registration)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let (rows, cols) = raster.shape();

    Ok(json!({
        "rows": rows,
        "cols": cols,
        "dx": raster.dx,
        "dy": raster.dy,
        "registration": registration.code(),
        "transform": raster.transform.0,
        "nodata": raster.nodata,
        "projection": raster.projection,
    })
    .to_string())
}

pub fn capabilities(toolkit: &Toolkit) -> String {
    toolkit
        .capabilities()
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single value is passed as a scalar so it broadcasts.
fn query_axis(values: Vec<f64>) -> QueryAxis {
    match values.as_slice() {
        [single] => QueryAxis::Scalar(*single),
        _ => QueryAxis::Values(values),
    }
}
