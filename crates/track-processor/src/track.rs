//! Ascending/descending track classification.
//!
//! A pass is split into two segments at the sample of maximum absolute
//! latitude: the samples before it, and the samples from it onward. Each
//! segment with at least two samples is ascending when latitude at its latest
//! time exceeds latitude at its earliest time; everything else is descending.
//!
//! The gap threshold does not create additional segments. Passes containing
//! time gaps larger than the threshold are still split only at the extremum,
//! and the classifier reports those gaps in the log.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TrackError};

/// Segment id for samples from the extremum onward.
const SEGMENT_FROM_EXTREMUM: u8 = 0;
/// Segment id for samples before the extremum.
const SEGMENT_BEFORE_EXTREMUM: u8 = 1;

/// Per-sample ascending/descending labels.
///
/// `ascending[i] == !descending[i]` for every index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackMasks {
    pub ascending: Vec<bool>,
    pub descending: Vec<bool>,
}

impl TrackMasks {
    fn from_ascending(ascending: Vec<bool>) -> Self {
        let descending = ascending.iter().map(|&a| !a).collect();
        Self {
            ascending,
            descending,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.ascending.len()
    }

    /// Whether the pass has no samples.
    pub fn is_empty(&self) -> bool {
        self.ascending.is_empty()
    }

    /// Indices labelled ascending.
    pub fn ascending_indices(&self) -> Vec<usize> {
        self.ascending
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| a.then_some(i))
            .collect()
    }

    /// Indices labelled descending.
    pub fn descending_indices(&self) -> Vec<usize> {
        self.descending
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| d.then_some(i))
            .collect()
    }
}

/// Classifies passes into ascending and descending segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackClassifier {
    /// Time gap (in the units of `time`) treated as a track break.
    pub gap_threshold: f64,
}

impl Default for TrackClassifier {
    fn default() -> Self {
        Self { gap_threshold: 1.0 }
    }
}

impl TrackClassifier {
    pub fn new(gap_threshold: f64) -> Self {
        Self { gap_threshold }
    }

    /// Label every sample of a pass ascending or descending.
    ///
    /// `time` and `lat` must have equal length. An empty pass yields empty
    /// masks, and segments shorter than two samples stay descending.
    pub fn classify(&self, time: &[f64], lat: &[f64]) -> Result<TrackMasks> {
        TrackError::check_lengths("time", time.len(), "lat", lat.len())?;

        let n = lat.len();
        let Some(split) = argmax(lat.iter().map(|v| v.abs())) else {
            return Ok(TrackMasks::default());
        };

        self.report_gaps(time);

        let mut ascending = vec![false; n];
        for (id, segment) in [
            (SEGMENT_FROM_EXTREMUM, split..n),
            (SEGMENT_BEFORE_EXTREMUM, 0..split),
        ] {
            if segment.len() < 2 {
                continue;
            }

            let lat_diff = segment_lat_diff(time, lat, segment.clone());
            if lat_diff > 0.0 {
                ascending[segment.clone()].fill(true);
            }

            debug!(
                segment = id,
                start = segment.start,
                end = segment.end,
                lat_diff,
                "Classified track segment"
            );
        }

        Ok(TrackMasks::from_ascending(ascending))
    }

    fn report_gaps(&self, time: &[f64]) {
        let gaps = time
            .windows(2)
            .filter(|w| (w[1] - w[0]).abs() > self.gap_threshold)
            .count();

        if gaps > 0 {
            warn!(
                gaps,
                gap_threshold = self.gap_threshold,
                "Pass contains time gaps above the threshold; splitting only at the latitude extremum"
            );
        }
    }
}

/// Separate a pass into ascending and descending samples.
///
/// Returns `(is_ascending, is_descending)` masks as [`TrackMasks`].
pub fn track_type(time: &[f64], lat: &[f64], tmax: f64) -> Result<TrackMasks> {
    TrackClassifier::new(tmax).classify(time, lat)
}

/// Segment id of every sample: 1 before the latitude extremum, 0 from it onward.
pub fn split_at_extremum(lat: &[f64]) -> Vec<u8> {
    let split = argmax(lat.iter().map(|v| v.abs())).unwrap_or(0);
    (0..lat.len())
        .map(|i| {
            if i < split {
                SEGMENT_BEFORE_EXTREMUM
            } else {
                SEGMENT_FROM_EXTREMUM
            }
        })
        .collect()
}

/// `lat` at the latest time minus `lat` at the earliest time within `segment`.
fn segment_lat_diff(time: &[f64], lat: &[f64], segment: Range<usize>) -> f64 {
    let offset = segment.start;
    let times = time[segment].iter().copied();

    match (argmin(times.clone()), argmax(times)) {
        (Some(i_min), Some(i_max)) => lat[offset + i_max] - lat[offset + i_min],
        _ => f64::NAN,
    }
}

/// Index of the maximum. Ties go to the first occurrence and the first NaN,
/// if any, is reported as the maximum.
fn argmax(values: impl Iterator<Item = f64>) -> Option<usize> {
    extremum(values, |candidate, best| candidate > best)
}

/// Index of the minimum, with the same tie and NaN rules as [`argmax`].
fn argmin(values: impl Iterator<Item = f64>) -> Option<usize> {
    extremum(values, |candidate, best| candidate < best)
}

fn extremum(
    values: impl Iterator<Item = f64>,
    better: impl Fn(f64, f64) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, v) in values.enumerate() {
        if v.is_nan() {
            return Some(i);
        }
        match best {
            Some((_, b)) if !better(v, b) => {}
            _ => best = Some((i, v)),
        }
    }

    best.map(|(i, _)| i)
}
