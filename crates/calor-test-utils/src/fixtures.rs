//! Reusable grid fixtures and float-comparison helpers.
//!
//! Three standard grids for kernel testing:
//!
//! - [`uniform_grid`] — every cell the same value (fixed-point checks).
//! - [`hot_center_grid`] — a single hot cell on a cold background.
//! - [`ramp_grid`] — linear in the column index (known-gradient checks).

use calor_core::Grid2D;

/// An `nx x ny` grid with every cell set to `value`.
///
/// Panics on invalid dimensions; fixtures are for tests, where that is a
/// test bug.
pub fn uniform_grid(nx: u32, ny: u32, value: f64) -> Grid2D {
    Grid2D::filled(nx, ny, value).unwrap()
}

/// A `background`-valued grid with `peak` at the center cell `(nx/2, ny/2)`.
pub fn hot_center_grid(nx: u32, ny: u32, background: f64, peak: f64) -> Grid2D {
    let mut g = Grid2D::filled(nx, ny, background).unwrap();
    g[(nx / 2, ny / 2)] = peak;
    g
}

/// A grid where cell `(i, j)` holds `j * slope`.
pub fn ramp_grid(nx: u32, ny: u32, slope: f64) -> Grid2D {
    Grid2D::from_fn(nx, ny, |_, j| f64::from(j) * slope).unwrap()
}

/// Assert two floats are within `tol` of each other.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

/// Assert two slices match element-wise within `tol`.
pub fn assert_slices_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "slot {i}: expected {e}, got {a} (tol {tol})"
        );
    }
}
