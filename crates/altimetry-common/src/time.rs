//! GPS time conversion for altimetry products.
//!
//! ICESat-2 and similar missions time-tag measurements in GPS seconds: elapsed
//! SI seconds since the GPS epoch, 1980-01-06T00:00:00 UTC, with no leap
//! seconds. GPS time runs a constant 19 s behind TAI, so decimal years are
//! computed on the TAI scale, where every calendar year has a whole number of
//! days.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::error::{AltimetryError, AltimetryResult};

/// Offset of GPS time behind TAI (seconds).
pub const GPS_TAI_OFFSET_SECS: i64 = 19;

/// GPS − UTC offsets, keyed by the UTC date on which each one took effect.
const LEAP_SECONDS: [((i32, u32, u32), i64); 18] = [
    ((1981, 7, 1), 1),
    ((1982, 7, 1), 2),
    ((1983, 7, 1), 3),
    ((1985, 7, 1), 4),
    ((1988, 1, 1), 5),
    ((1990, 1, 1), 6),
    ((1991, 1, 1), 7),
    ((1992, 7, 1), 8),
    ((1993, 7, 1), 9),
    ((1994, 7, 1), 10),
    ((1996, 1, 1), 11),
    ((1997, 7, 1), 12),
    ((1999, 1, 1), 13),
    ((2006, 1, 1), 14),
    ((2009, 1, 1), 15),
    ((2012, 7, 1), 16),
    ((2015, 7, 1), 17),
    ((2017, 1, 1), 18),
];

fn gps_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1980, 1, 6)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn start_of_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn seconds_f64(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + delta.subsec_nanos() as f64 * 1e-9
}

/// Add fractional seconds to a naive instant.
fn offset_by(base: NaiveDateTime, seconds: f64) -> AltimetryResult<NaiveDateTime> {
    if !seconds.is_finite() {
        return Err(AltimetryError::InvalidTime(format!(
            "non-finite GPS time: {}",
            seconds
        )));
    }

    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as i64;

    TimeDelta::try_seconds(whole as i64)
        .map(|delta| delta + TimeDelta::nanoseconds(nanos))
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or_else(|| {
            AltimetryError::InvalidTime(format!("GPS time out of range: {}", seconds))
        })
}

/// Convert GPS seconds to a decimal year.
///
/// The GPS epoch itself converts to `1980 + (5 d + 19 s) / 366 d`.
pub fn gps_to_decimal_year(gps_seconds: f64) -> AltimetryResult<f64> {
    let tai_epoch = gps_epoch() + TimeDelta::seconds(GPS_TAI_OFFSET_SECS);
    let instant = offset_by(tai_epoch, gps_seconds)?;

    let year = instant.year();
    let (start, end) = match (start_of_year(year), start_of_year(year + 1)) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(AltimetryError::InvalidTime(format!(
                "year {} out of range",
                year
            )))
        }
    };

    let fraction = seconds_f64(instant - start) / seconds_f64(end - start);
    Ok(year as f64 + fraction)
}

/// Convert a sequence of GPS times to decimal years.
pub fn gps_to_decimal_years(gps_seconds: &[f64]) -> AltimetryResult<Vec<f64>> {
    gps_seconds.iter().map(|&t| gps_to_decimal_year(t)).collect()
}

/// GPS − UTC offset in effect at the given GPS time.
pub fn leap_seconds_at(gps_seconds: f64) -> i64 {
    let epoch = gps_epoch();

    LEAP_SECONDS
        .iter()
        .rev()
        .find_map(|&((y, m, d), offset)| {
            let effective = NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)?;
            let threshold = (effective - epoch).num_seconds() + offset;
            (gps_seconds >= threshold as f64).then_some(offset)
        })
        .unwrap_or(0)
}

/// Convert GPS seconds to a UTC calendar time.
pub fn gps_to_utc(gps_seconds: f64) -> AltimetryResult<DateTime<Utc>> {
    let leap = leap_seconds_at(gps_seconds);
    let naive = offset_by(gps_epoch(), gps_seconds - leap as f64)?;
    Ok(Utc.from_utc_datetime(&naive))
}
