//! NetCDF reader tests against files written to a temp directory.

#![cfg(feature = "netcdf")]

use std::path::{Path, PathBuf};

use raster_io::{NetCdfReader, RasterIoError, VariableReader};
use test_utils::paths::temp_test_dir_with_prefix;

/// Write a small 2 x 3 file with a plain, a packed and a masked variable.
fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("firn.nc");
    let mut file = netcdf::create(&path).expect("create netcdf");
    file.add_dimension("y", 2).unwrap();
    file.add_dimension("x", 3).unwrap();

    let mut x = file.add_variable::<f64>("x", &["x"]).unwrap();
    x.put_values(&[-1000.0, 0.0, 1000.0], ..).unwrap();

    let mut packed = file.add_variable::<i16>("h_packed", &["y", "x"]).unwrap();
    packed.put_attribute("scale_factor", 0.5f64).unwrap();
    packed.put_attribute("add_offset", 100.0f64).unwrap();
    packed.put_values(&[0i16, 2, 4, 6, 8, 10], ..).unwrap();

    let mut masked = file.add_variable::<f32>("fac", &["y", "x"]).unwrap();
    masked.put_attribute("_FillValue", -9999.0f32).unwrap();
    masked
        .put_values(&[1.5f32, -9999.0, 2.5, 3.5, 4.5, -9999.0], ..)
        .unwrap();

    path
}

#[test]
fn test_reads_variables_in_requested_order() {
    let dir = temp_test_dir_with_prefix("ncread");
    let path = write_fixture(dir.path());

    let arrays = NetCdfReader::new()
        .read_variables(&path, &["h_packed", "x"])
        .unwrap();

    assert_eq!(arrays.len(), 2);
    assert_eq!(arrays[0].shape(), &[2, 3]);
    assert_eq!(arrays[1].shape(), &[3]);
    assert_eq!(arrays[1].as_slice().unwrap(), &[-1000.0, 0.0, 1000.0]);
}

#[test]
fn test_packed_values_unpacked() {
    let dir = temp_test_dir_with_prefix("ncread");
    let path = write_fixture(dir.path());

    let arrays = NetCdfReader::new().read_variables(&path, &["h_packed"]).unwrap();
    let values: Vec<f64> = arrays[0].iter().copied().collect();
    assert_eq!(values, vec![100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
}

#[test]
fn test_fill_values_masked() {
    let dir = temp_test_dir_with_prefix("ncread");
    let path = write_fixture(dir.path());

    let arrays = NetCdfReader::new().read_variables(&path, &["fac"]).unwrap();
    let fac = &arrays[0];
    assert_eq!(fac[[0, 0]], 1.5);
    assert!(fac[[0, 1]].is_nan());
    assert!(fac[[1, 2]].is_nan());
    assert_eq!(fac[[1, 1]], 4.5);
}

#[test]
fn test_missing_variable() {
    let dir = temp_test_dir_with_prefix("ncread");
    let path = write_fixture(dir.path());

    let err = NetCdfReader::new()
        .read_variables(&path, &["x", "smb"])
        .unwrap_err();
    assert!(matches!(err, RasterIoError::MissingVariable { ref name, .. } if name == "smb"));
}

#[test]
fn test_missing_file() {
    let dir = temp_test_dir_with_prefix("ncread");
    let err = NetCdfReader::new()
        .read_variables(&dir.path().join("absent.nc"), &["x"])
        .unwrap_err();
    assert!(matches!(err, RasterIoError::Io(_)));
}

#[test]
fn test_not_a_netcdf_file() {
    let dir = temp_test_dir_with_prefix("ncread");
    let path = dir.path().join("notes.nc");
    std::fs::write(&path, b"plain text").unwrap();

    let err = NetCdfReader::new().read_variables(&path, &["x"]).unwrap_err();
    assert!(matches!(err, RasterIoError::Open { .. }));
}
