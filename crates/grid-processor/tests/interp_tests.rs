//! Integration tests for regular-grid interpolation.

use grid_processor::{
    interp2d, BoundaryMode, GridProcessorError, InterpolationOrder, RegularGrid, SampleOptions,
};
use ndarray::Array2;
use test_utils::generators::{linspace, plane_grid};
use test_utils::{assert_approx_eq, assert_slice_approx_eq};

/// 5 x 4 polar stereographic style grid with 1 km spacing.
fn plane(a: f64, b: f64, c: f64) -> (Vec<f64>, Vec<f64>, Array2<f64>) {
    let xd = linspace(-2000.0, 2000.0, 5);
    let yd = linspace(-1500.0, 1500.0, 4);
    let values = plane_grid(&xd, &yd, a, b, c);
    let data = Array2::from_shape_vec((yd.len(), xd.len()), values).unwrap();
    (xd, yd, data)
}

// =============================================================================
// Node and plane tests
// =============================================================================

#[test]
fn test_nodes_return_node_values() {
    let (xd, yd, data) = plane(100.0, 0.01, -0.02);

    for (row, &y) in yd.iter().enumerate() {
        for (col, &x) in xd.iter().enumerate() {
            let zq = interp2d(&xd, &yd, data.view(), x, y, &SampleOptions::default()).unwrap();
            assert_approx_eq!(zq[0], data[[row, col]], 1e-9);
        }
    }
}

#[test]
fn test_plane_reproduced_between_nodes() {
    let (a, b, c) = (250.0, 0.003, 0.007);
    let (xd, yd, data) = plane(a, b, c);

    let xq = vec![-1750.0, -333.3, 0.0, 1234.5, 1999.0];
    let yq = vec![-1499.0, 12.0, 875.0, -640.0, 1500.0];
    let expected: Vec<f64> = xq.iter().zip(&yq).map(|(x, y)| a + b * x + c * y).collect();

    let zq = interp2d(&xd, &yd, data.view(), xq, yq, &SampleOptions::default()).unwrap();
    assert_slice_approx_eq!(zq, expected, 1e-9);
}

#[test]
fn test_scalar_x_broadcasts() {
    let (xd, yd, data) = plane(0.0, 1.0, 1.0);

    let zq = interp2d(
        &xd,
        &yd,
        data.view(),
        500.0,
        vec![-1000.0, 0.0, 1000.0],
        &SampleOptions::default(),
    )
    .unwrap();

    assert_eq!(zq.len(), 3);
    assert_slice_approx_eq!(zq, [-500.0, 500.0, 1500.0], 1e-9);
}

// =============================================================================
// Normalization tests
// =============================================================================

#[test]
fn test_decreasing_axes_match_increasing() {
    let (xd, yd, data) = plane(10.0, 0.5, -0.25);

    let mut xd_rev = xd.clone();
    xd_rev.reverse();
    let mut yd_rev = yd.clone();
    yd_rev.reverse();
    let mut flipped = data.clone();
    flipped.invert_axis(ndarray::Axis(0));
    flipped.invert_axis(ndarray::Axis(1));

    let xq = vec![-1900.0, -10.0, 777.0];
    let yq = vec![1400.0, -5.0, -1100.0];
    let options = SampleOptions::default();

    let normal = interp2d(&xd, &yd, data.view(), xq.clone(), yq.clone(), &options).unwrap();
    let reversed = interp2d(&xd_rev, &yd_rev, flipped.view(), xq, yq, &options).unwrap();

    assert_slice_approx_eq!(normal, reversed, 1e-9);
}

#[test]
fn test_caller_data_not_modified() {
    let (xd, yd, data) = plane(1.0, 2.0, 3.0);
    let mut xd_rev = xd.clone();
    xd_rev.reverse();
    let before = data.clone();

    interp2d(&xd_rev, &yd, data.view(), 0.0, 0.0, &SampleOptions::default()).unwrap();

    assert_eq!(data, before);
}

// =============================================================================
// Error tests
// =============================================================================

#[test]
fn test_shape_mismatch() {
    let (xd, yd, _) = plane(0.0, 0.0, 0.0);
    let wrong = Array2::<f64>::zeros((xd.len(), yd.len()));

    let err = interp2d(&xd, &yd, wrong.view(), 0.0, 0.0, &SampleOptions::default()).unwrap_err();
    assert_eq!(
        err,
        GridProcessorError::ShapeMismatch {
            expected: (4, 5),
            actual: (5, 4)
        }
    );
}

#[test]
fn test_query_length_mismatch() {
    let (xd, yd, data) = plane(0.0, 0.0, 0.0);
    let err = interp2d(
        &xd,
        &yd,
        data.view(),
        vec![0.0, 1.0],
        vec![0.0, 1.0, 2.0],
        &SampleOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, GridProcessorError::QueryLengthMismatch { x: 2, y: 3 });
}

// =============================================================================
// Boundary mode tests
// =============================================================================

fn ramp_grid() -> RegularGrid {
    // Values 0, 1, 2, 3 along x, constant along y
    RegularGrid::from_row_major(
        vec![0.0, 10.0, 20.0, 30.0],
        vec![0.0, 10.0],
        vec![0.0, 1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0],
    )
    .unwrap()
}

fn sample_x(grid: &RegularGrid, x: f64, mode: BoundaryMode) -> f64 {
    let options = SampleOptions::default()
        .with_order(InterpolationOrder::Nearest)
        .with_mode(mode)
        .with_cval(-1.0);
    grid.sample(&x.into(), &0.0.into(), &options).unwrap()[0]
}

#[test]
fn test_boundary_modes_outside_grid() {
    let grid = ramp_grid();

    // One node past each edge.
    assert_eq!(sample_x(&grid, -10.0, BoundaryMode::Constant), -1.0);
    assert_eq!(sample_x(&grid, -10.0, BoundaryMode::Nearest), 0.0);
    assert_eq!(sample_x(&grid, -10.0, BoundaryMode::Reflect), 0.0);
    assert_eq!(sample_x(&grid, -10.0, BoundaryMode::Mirror), 1.0);
    assert_eq!(sample_x(&grid, -10.0, BoundaryMode::Wrap), 3.0);

    assert_eq!(sample_x(&grid, 40.0, BoundaryMode::Constant), -1.0);
    assert_eq!(sample_x(&grid, 40.0, BoundaryMode::Nearest), 3.0);
    assert_eq!(sample_x(&grid, 40.0, BoundaryMode::Reflect), 3.0);
    assert_eq!(sample_x(&grid, 40.0, BoundaryMode::Mirror), 2.0);
    assert_eq!(sample_x(&grid, 40.0, BoundaryMode::Wrap), 0.0);
}

#[test]
fn test_constant_mode_just_outside_returns_cval() {
    let grid = ramp_grid();
    let options = SampleOptions::default().with_cval(f64::NAN);

    let zq = grid
        .sample(&vec![-0.001, 30.001, 15.0].into(), &0.0.into(), &options)
        .unwrap();
    assert!(zq[0].is_nan());
    assert!(zq[1].is_nan());
    assert_approx_eq!(zq[2], 1.5, 1e-12);
}

#[test]
fn test_far_queries_in_extended_modes() {
    let z = ndarray::array![[1.0, 2.0], [3.0, 4.0]];
    let options = SampleOptions::default().with_mode(BoundaryMode::Nearest);
    let zq = interp2d(&[0.0, 1.0], &[0.0, 1.0], z.view(), 1e19, 0.0, &options).unwrap();
    assert_eq!(zq, vec![2.0]);

    // Column 4e13 + 2 is a whole number of wrap periods past column 2.
    let grid = ramp_grid();
    assert_eq!(sample_x(&grid, 4.0e14 + 20.0, BoundaryMode::Wrap), 2.0);

    for mode in [BoundaryMode::Reflect, BoundaryMode::Mirror, BoundaryMode::Wrap] {
        let options = SampleOptions::default().with_mode(mode);
        let zq = grid
            .sample(&vec![1e300, -1e300, f64::MAX].into(), &0.0.into(), &options)
            .unwrap();
        assert!(zq.iter().all(|v| (0.0..=3.0).contains(v)), "{}: {:?}", mode, zq);
    }
}

#[test]
fn test_nan_query_yields_nan() {
    let grid = ramp_grid();
    let zq = grid
        .sample(&f64::NAN.into(), &0.0.into(), &SampleOptions::default())
        .unwrap();
    assert!(zq[0].is_nan());
}

#[test]
fn test_index_encoded_grid() {
    // Node (row, col) holds col * 1000 + row
    let grid = RegularGrid::from_row_major(
        linspace(0.0, 3.0, 4),
        linspace(0.0, 2.0, 3),
        test_utils::create_test_grid(4, 3),
    )
    .unwrap();

    let linear = grid
        .sample(&1.5.into(), &2.0.into(), &SampleOptions::default())
        .unwrap();
    assert_approx_eq!(linear[0], 1502.0, 1e-9);

    let nearest = SampleOptions::default().with_order(InterpolationOrder::Nearest);
    let zq = grid.sample(&2.4.into(), &0.6.into(), &nearest).unwrap();
    assert_eq!(zq, vec![2001.0]);
}
