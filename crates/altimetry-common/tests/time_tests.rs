//! Tests for GPS time conversion.

use altimetry_common::time::{gps_to_decimal_year, gps_to_decimal_years, gps_to_utc};
use chrono::{TimeZone, Utc};
use test_utils::assert_approx_eq;

const DAY: f64 = 86400.0;

#[test]
fn test_gps_billion_seconds_utc() {
    // Widely published reference instant.
    let utc = gps_to_utc(1_000_000_000.0).unwrap();
    assert_eq!(utc, Utc.with_ymd_and_hms(2011, 9, 14, 1, 46, 25).unwrap());
}

#[test]
fn test_gps_epoch_utc() {
    let utc = gps_to_utc(0.0).unwrap();
    assert_eq!(utc, Utc.with_ymd_and_hms(1980, 1, 6, 0, 0, 0).unwrap());
}

#[test]
fn test_decimal_year_start_of_1981() {
    // 1981-01-01T00:00:00 TAI is 361 days minus the 19 s TAI offset after the epoch.
    let t = 361.0 * DAY - 19.0;
    assert_approx_eq!(gps_to_decimal_year(t).unwrap(), 1981.0, 1e-10);
}

#[test]
fn test_decimal_year_mid_year() {
    // Half of 1981 (365 days) after its start.
    let t = 361.0 * DAY - 19.0 + 182.5 * DAY;
    assert_approx_eq!(gps_to_decimal_year(t).unwrap(), 1981.5, 1e-10);
}

#[test]
fn test_decimal_year_subsecond_resolution() {
    let a = gps_to_decimal_year(1_200_000_000.0).unwrap();
    let b = gps_to_decimal_year(1_200_000_000.5).unwrap();
    let expected = 0.5 / (365.0 * DAY);
    assert_approx_eq!(b - a, expected, 1e-10);
}

#[test]
fn test_decimal_years_sequence() {
    let times = [0.0, 1.0e9, 1.3e9];
    let years = gps_to_decimal_years(&times).unwrap();
    assert_eq!(years.len(), 3);
    assert!(years.windows(2).all(|w| w[0] < w[1]));
    assert!(years[1] > 2011.7 && years[1] < 2011.71, "got {}", years[1]);
}

#[test]
fn test_decimal_years_rejects_nan() {
    assert!(gps_to_decimal_years(&[0.0, f64::NAN]).is_err());
}

#[test]
fn test_negative_gps_time() {
    // One TAI day before the epoch stays in 1980.
    let dyr = gps_to_decimal_year(-DAY).unwrap();
    let expected = 1980.0 + (4.0 * DAY + 19.0) / (366.0 * DAY);
    assert_approx_eq!(dyr, expected, 1e-10);
}
