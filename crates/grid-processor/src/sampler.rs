//! Index-space sampling of a 2D array.
//!
//! Coordinates are fractional (row, col) indices into the array. Order 0
//! picks the nearest node, order 1 blends the four surrounding nodes. Beyond
//! `[0, n-1]` the array is extended according to the [`BoundaryMode`].

use ndarray::ArrayView2;

use crate::error::{GridProcessorError, Result};
use crate::types::{BoundaryMode, InterpolationOrder, SampleOptions};

/// Sample `data` at each `(rows[i], cols[i])`.
pub fn map_coordinates(
    data: ArrayView2<'_, f64>,
    rows: &[f64],
    cols: &[f64],
    options: &SampleOptions,
) -> Result<Vec<f64>> {
    if rows.len() != cols.len() {
        return Err(GridProcessorError::QueryLengthMismatch {
            x: cols.len(),
            y: rows.len(),
        });
    }

    Ok(rows
        .iter()
        .zip(cols)
        .map(|(&r, &c)| sample_point(&data, r, c, options))
        .collect())
}

/// Sample a single fractional index.
pub fn sample_point(
    data: &ArrayView2<'_, f64>,
    row: f64,
    col: f64,
    options: &SampleOptions,
) -> f64 {
    if !row.is_finite() || !col.is_finite() {
        return f64::NAN;
    }

    let (height, width) = data.dim();
    if height == 0 || width == 0 {
        return options.cval;
    }

    if options.mode == BoundaryMode::Constant
        && (row < 0.0 || row > (height - 1) as f64 || col < 0.0 || col > (width - 1) as f64)
    {
        return options.cval;
    }

    let row = fold_coordinate(row, height, options.mode);
    let col = fold_coordinate(col, width, options.mode);

    match options.order {
        InterpolationOrder::Nearest => {
            let r = (row + 0.5).floor() as isize;
            let c = (col + 0.5).floor() as isize;
            read(data, r, c, options)
        }
        InterpolationOrder::Linear => {
            let r0 = row.floor();
            let c0 = col.floor();
            let fr = row - r0;
            let fc = col - c0;
            let (r0, c0) = (r0 as isize, c0 as isize);

            let corners = [
                (r0, c0, (1.0 - fr) * (1.0 - fc)),
                (r0, c0 + 1, (1.0 - fr) * fc),
                (r0 + 1, c0, fr * (1.0 - fc)),
                (r0 + 1, c0 + 1, fr * fc),
            ];

            corners
                .iter()
                .filter(|(_, _, w)| *w != 0.0)
                .map(|&(r, c, w)| w * read(data, r, c, options))
                .sum()
        }
    }
}

/// Bring a coordinate outside `[0, n-1]` within one period of the array.
///
/// Every non-constant mode is clamped or periodic with an integer period, so
/// the folded coordinate samples the same value.
fn fold_coordinate(x: f64, n: usize, mode: BoundaryMode) -> f64 {
    let last = (n - 1) as f64;
    if (0.0..=last).contains(&x) {
        return x;
    }

    let period = match mode {
        BoundaryMode::Constant => return x,
        BoundaryMode::Nearest => return x.clamp(-1.0, last + 1.0),
        BoundaryMode::Reflect => 2 * n,
        BoundaryMode::Mirror if n == 1 => return 0.0,
        BoundaryMode::Mirror => 2 * n - 2,
        BoundaryMode::Wrap => n,
    };

    x.rem_euclid(period as f64)
}

fn read(data: &ArrayView2<'_, f64>, row: isize, col: isize, options: &SampleOptions) -> f64 {
    let (height, width) = data.dim();
    match (
        extend_index(row, height, options.mode),
        extend_index(col, width, options.mode),
    ) {
        (Some(r), Some(c)) => data[[r, c]],
        _ => options.cval,
    }
}

/// Map an index outside `[0, n)` back into range. `None` under `Constant`.
pub fn extend_index(i: isize, n: usize, mode: BoundaryMode) -> Option<usize> {
    let m = n as isize;
    if m == 0 {
        return None;
    }
    if (0..m).contains(&i) {
        return Some(i as usize);
    }

    let mapped = match mode {
        BoundaryMode::Constant => return None,
        BoundaryMode::Nearest => i.clamp(0, m - 1),
        BoundaryMode::Reflect => {
            let k = i.rem_euclid(2 * m);
            if k < m {
                k
            } else {
                2 * m - 1 - k
            }
        }
        BoundaryMode::Mirror => {
            if m == 1 {
                0
            } else {
                let k = i.rem_euclid(2 * m - 2);
                if k < m {
                    k
                } else {
                    2 * m - 2 - k
                }
            }
        }
        BoundaryMode::Wrap => i.rem_euclid(m),
    };

    Some(mapped as usize)
}
