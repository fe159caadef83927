//! Synthetic data generators for grids and ground tracks.
//!
//! Values follow simple closed-form patterns so tests can compute the
//! expected result independently of the code under test.

/// Evenly spaced values from `start` to `stop` inclusive.
///
/// ```
/// use test_utils::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Creates a test grid with predictable values.
///
/// Each cell value is `col * 1000 + row`, in row-major order.
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[1], 1000.0);
/// assert_eq!(grid[10], 1.0);
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Samples the plane `z = a + b*x + c*y` on the grid spanned by `xd` and `yd`.
///
/// Bilinear interpolation reproduces a plane exactly, which makes this the
/// reference surface for interpolation tests. Row-major, `yd.len()` rows.
pub fn plane_grid(xd: &[f64], yd: &[f64], a: f64, b: f64, c: f64) -> Vec<f64> {
    yd.iter()
        .flat_map(|&y| xd.iter().map(move |&x| a + b * x + c * y))
        .collect()
}

/// A polar pass that heads poleward to `turn_lat` and then back out.
///
/// Latitudes are linear in time on both legs; `n` samples at one-second
/// spacing, with the turn at sample `n / 2`.
pub fn polar_pass(n: usize, start_lat: f64, turn_lat: f64) -> (Vec<f64>, Vec<f64>) {
    let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let half = (n / 2).max(1) as f64;

    let lat = time
        .iter()
        .map(|&t| {
            let frac = if t <= half { t / half } else { (2.0 * half - t) / half };
            start_lat + (turn_lat - start_lat) * frac
        })
        .collect();

    (time, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(-2.0, 2.0, 5);
        assert_eq!(v, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_plane_grid_layout() {
        let z = plane_grid(&[0.0, 1.0, 2.0], &[10.0, 20.0], 1.0, 2.0, 0.5);
        assert_eq!(z.len(), 6);
        assert_eq!(z[0], 1.0 + 0.0 + 5.0);
        assert_eq!(z[2], 1.0 + 4.0 + 5.0);
        assert_eq!(z[3], 1.0 + 0.0 + 10.0);
    }

    #[test]
    fn test_polar_pass_turns_at_middle() {
        let (time, lat) = polar_pass(11, -70.0, -88.0);
        assert_eq!(time.len(), 11);
        assert_eq!(lat[0], -70.0);
        assert_eq!(lat[5], -88.0);
        assert_eq!(lat[10], -70.0);
    }
}
