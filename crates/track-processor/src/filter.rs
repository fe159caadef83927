//! Segment-difference filter for along-track land-ice heights.
//!
//! Each segment carries a height `h_li` and an along-track slope `dh_fit_dx`.
//! Extrapolating a segment's height one segment spacing forward and back
//! should land close to its neighbours' heights. Segments where either
//! end-point misses by the tolerance or more are rejected.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};

/// Along-track distance (meters) between neighbouring segment centres.
pub const SEGMENT_SPACING_M: f64 = 20.0;

/// Minimum number of segments needed for a meaningful comparison.
const MIN_SEGMENTS: usize = 3;

/// Segment-difference filter settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentDiffFilter {
    /// Largest accepted end-point mismatch (meters).
    pub tolerance: f64,
    /// Extrapolation distance (meters).
    pub spacing: f64,
}

impl Default for SegmentDiffFilter {
    fn default() -> Self {
        Self {
            tolerance: 2.0,
            spacing: SEGMENT_SPACING_M,
        }
    }
}

impl SegmentDiffFilter {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    /// Per-segment end-point mismatch.
    ///
    /// NaN inputs propagate into the neighbouring differences.
    pub fn segment_differences(&self, dh_fit_dx: &[f64], h_li: &[f64]) -> Result<Vec<f64>> {
        TrackError::check_lengths("dh_fit_dx", dh_fit_dx.len(), "h_li", h_li.len())?;

        let n = h_li.len();
        let ep_plus: Vec<f64> = h_li
            .iter()
            .zip(dh_fit_dx)
            .map(|(h, dh)| h + self.spacing * dh)
            .collect();
        let ep_minus: Vec<f64> = h_li
            .iter()
            .zip(dh_fit_dx)
            .map(|(h, dh)| h - self.spacing * dh)
            .collect();

        let mut seg_diff = vec![0.0; n];
        for i in 0..n.saturating_sub(1) {
            seg_diff[i] = (ep_plus[i] - h_li[i + 1]).abs();
        }
        for i in 1..n {
            seg_diff[i] = nan_max(seg_diff[i], (h_li[i - 1] - ep_minus[i]).abs());
        }

        Ok(seg_diff)
    }

    /// Mask of segments consistent with their neighbours.
    ///
    /// Fewer than three segments are all accepted. NaN mismatches are rejected.
    pub fn apply(&self, dh_fit_dx: &[f64], h_li: &[f64]) -> Result<Vec<bool>> {
        TrackError::check_lengths("dh_fit_dx", dh_fit_dx.len(), "h_li", h_li.len())?;

        if h_li.len() < MIN_SEGMENTS {
            return Ok(vec![true; h_li.len()]);
        }

        Ok(self
            .segment_differences(dh_fit_dx, h_li)?
            .into_iter()
            .map(|d| d < self.tolerance)
            .collect())
    }
}

/// Filter segments by consecutive difference.
pub fn seg_diff_filter(dh_fit_dx: &[f64], h_li: &[f64], tol: f64) -> Result<Vec<bool>> {
    SegmentDiffFilter::new(tol).apply(dh_fit_dx, h_li)
}

/// Maximum that propagates NaN from either side.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
