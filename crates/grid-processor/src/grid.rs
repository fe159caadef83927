//! Regular grids with 1D coordinate axes.

use ndarray::{Array2, ArrayView2, Axis};
use tracing::debug;

use crate::error::{GridProcessorError, Result};
use crate::sampler::map_coordinates;
use crate::types::{broadcast, QueryAxis, SampleOptions};

/// A 2D grid with evenly spaced, strictly increasing axes.
///
/// `data` is indexed `[row, col]`, rows following `yd` and columns `xd`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularGrid {
    xd: Vec<f64>,
    yd: Vec<f64>,
    data: Array2<f64>,
}

impl RegularGrid {
    /// Validate a grid and normalize decreasing axes to increasing order.
    pub fn new(mut xd: Vec<f64>, mut yd: Vec<f64>, mut data: Array2<f64>) -> Result<Self> {
        let expected = (yd.len(), xd.len());
        if data.dim() != expected {
            return Err(GridProcessorError::ShapeMismatch {
                expected,
                actual: data.dim(),
            });
        }

        check_length("xd", &xd)?;
        check_length("yd", &yd)?;

        if xd[xd.len() - 1] < xd[0] {
            debug!("Reversing decreasing x axis");
            xd.reverse();
            data.invert_axis(Axis(1));
        }
        if yd[yd.len() - 1] < yd[0] {
            debug!("Reversing decreasing y axis");
            yd.reverse();
            data.invert_axis(Axis(0));
        }

        check_increasing("xd", &xd)?;
        check_increasing("yd", &yd)?;

        Ok(Self { xd, yd, data })
    }

    /// Build a grid from row-major values.
    pub fn from_row_major(xd: Vec<f64>, yd: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        let shape = (yd.len(), xd.len());
        let actual = (values.len(), 1);
        let data = Array2::from_shape_vec(shape, values).map_err(|_| {
            GridProcessorError::ShapeMismatch {
                expected: shape,
                actual,
            }
        })?;
        Self::new(xd, yd, data)
    }

    /// Build a grid from 2D coordinate arrays such as a meshgrid.
    ///
    /// The x axis is read from the first row of `x`, the y axis from the first
    /// column of `y`.
    pub fn from_meshgrid(
        x: ArrayView2<'_, f64>,
        y: ArrayView2<'_, f64>,
        data: Array2<f64>,
    ) -> Result<Self> {
        if x.nrows() == 0 {
            return Err(GridProcessorError::DegenerateAxis { axis: "xd", len: 0 });
        }
        if y.ncols() == 0 {
            return Err(GridProcessorError::DegenerateAxis { axis: "yd", len: 0 });
        }

        let xd = x.row(0).to_vec();
        let yd = y.column(0).to_vec();
        Self::new(xd, yd, data)
    }

    pub fn xd(&self) -> &[f64] {
        &self.xd
    }

    pub fn yd(&self) -> &[f64] {
        &self.yd
    }

    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Fractional `(col, row)` index of a map coordinate.
    pub fn fractional_index(&self, xq: f64, yq: f64) -> (f64, f64) {
        (axis_position(&self.xd, xq), axis_position(&self.yd, yq))
    }

    /// Sample the grid at each query point.
    pub fn sample(
        &self,
        xq: &QueryAxis,
        yq: &QueryAxis,
        options: &SampleOptions,
    ) -> Result<Vec<f64>> {
        let (xq, yq) = broadcast(xq, yq)?;

        let cols: Vec<f64> = xq.iter().map(|&x| axis_position(&self.xd, x)).collect();
        let rows: Vec<f64> = yq.iter().map(|&y| axis_position(&self.yd, y)).collect();

        debug!(
            points = rows.len(),
            rows = self.data.nrows(),
            cols = self.data.ncols(),
            order = %options.order,
            mode = %options.mode,
            "Sampling grid"
        );

        map_coordinates(self.data.view(), &rows, &cols, options)
    }
}

/// Bilinear interpolation of a regular grid at arbitrary points.
///
/// `data` has shape `(len(yd), len(xd))`. Either query axis may be a single
/// coordinate, which is repeated to the length of the other.
///
/// # Example
///
/// ```
/// use grid_processor::{interp2d, SampleOptions};
/// use ndarray::array;
///
/// let xd = [0.0, 1.0, 2.0];
/// let yd = [0.0, 1.0];
/// let z = array![[0.0, 1.0, 2.0], [10.0, 11.0, 12.0]];
///
/// let zq = interp2d(&xd, &yd, z.view(), 0.5, vec![0.0, 0.5], &SampleOptions::default()).unwrap();
/// assert_eq!(zq, vec![0.5, 5.5]);
/// ```
pub fn interp2d(
    xd: &[f64],
    yd: &[f64],
    data: ArrayView2<'_, f64>,
    xq: impl Into<QueryAxis>,
    yq: impl Into<QueryAxis>,
    options: &SampleOptions,
) -> Result<Vec<f64>> {
    let grid = RegularGrid::new(xd.to_vec(), yd.to_vec(), data.to_owned())?;
    grid.sample(&xq.into(), &yq.into(), options)
}

fn axis_position(axis: &[f64], value: f64) -> f64 {
    let n = axis.len();
    (value - axis[0]) * (n - 1) as f64 / (axis[n - 1] - axis[0])
}

fn check_length(axis: &'static str, values: &[f64]) -> Result<()> {
    if values.len() < 2 {
        return Err(GridProcessorError::DegenerateAxis {
            axis,
            len: values.len(),
        });
    }
    Ok(())
}

fn check_increasing(axis: &'static str, values: &[f64]) -> Result<()> {
    if values.windows(2).all(|w| w[1] > w[0]) {
        Ok(())
    } else {
        Err(GridProcessorError::NonMonotonicAxis { axis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_shape_checked_before_axes() {
        let err = RegularGrid::new(vec![0.0, 1.0], vec![0.0, 1.0, 2.0], Array2::zeros((2, 2)))
            .unwrap_err();
        assert_eq!(
            err,
            GridProcessorError::ShapeMismatch {
                expected: (3, 2),
                actual: (2, 2)
            }
        );
    }

    #[test]
    fn test_degenerate_axis() {
        let err = RegularGrid::new(vec![0.0], vec![0.0, 1.0], Array2::zeros((2, 1))).unwrap_err();
        assert_eq!(err, GridProcessorError::DegenerateAxis { axis: "xd", len: 1 });
    }

    #[test]
    fn test_non_monotonic_axis() {
        let err = RegularGrid::new(vec![0.0, 2.0, 1.0, 3.0], vec![0.0, 1.0], Array2::zeros((2, 4)))
            .unwrap_err();
        assert_eq!(err, GridProcessorError::NonMonotonicAxis { axis: "xd" });
    }

    #[test]
    fn test_decreasing_axes_normalized() {
        let grid = RegularGrid::new(
            vec![2.0, 1.0, 0.0],
            vec![1.0, 0.0],
            array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
        )
        .unwrap();

        assert_eq!(grid.xd(), &[0.0, 1.0, 2.0]);
        assert_eq!(grid.yd(), &[0.0, 1.0]);
        assert_eq!(grid.data(), array![[6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]);
    }

    #[test]
    fn test_fractional_index() {
        let grid = RegularGrid::new(
            vec![-1000.0, 0.0, 1000.0],
            vec![500.0, 1000.0],
            Array2::zeros((2, 3)),
        )
        .unwrap();
        assert_eq!(grid.fractional_index(500.0, 750.0), (1.5, 0.5));
    }

    #[test]
    fn test_from_meshgrid() {
        let x = array![[0.0, 10.0, 20.0], [0.0, 10.0, 20.0]];
        let y = array![[5.0, 5.0, 5.0], [6.0, 6.0, 6.0]];
        let grid = RegularGrid::from_meshgrid(x.view(), y.view(), Array2::zeros((2, 3))).unwrap();
        assert_eq!(grid.xd(), &[0.0, 10.0, 20.0]);
        assert_eq!(grid.yd(), &[5.0, 6.0]);
    }

    #[test]
    fn test_from_row_major_shape_error() {
        let err = RegularGrid::from_row_major(vec![0.0, 1.0], vec![0.0, 1.0], vec![1.0; 3])
            .unwrap_err();
        assert!(matches!(err, GridProcessorError::ShapeMismatch { .. }));
    }
}
