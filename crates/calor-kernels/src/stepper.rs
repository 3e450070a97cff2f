//! Explicit FTCS time step for the 2D heat equation.

use calor_core::{Grid2D, KernelError};
use calor_exec::Executor;

/// One forward-time, centred-space step of the 2D diffusion equation.
///
/// For every interior cell `(i, j)`:
///
/// ```text
/// new[i][j] = old[i][j] + nu * (old[i-1][j] + old[i+1][j]
///                             + old[i][j-1] + old[i][j+1]
///                             - 4 * old[i][j])
/// ```
///
/// Boundary rows and columns of `new` are never written; boundary
/// conditions are the caller's job, as is choosing `nu` within the FTCS
/// stability bound (`nu <= 0.25` for this five-point stencil). The old and
/// new grids cannot alias: the borrow checker enforces what the C original
/// left to caller discipline.
///
/// The worker-pool and sequential executors run the identical per-cell
/// body, partitioned by interior row, so their results are bitwise equal.
///
/// # Examples
///
/// ```
/// use calor_core::Grid2D;
/// use calor_exec::Executor;
/// use calor_kernels::HeatStep;
///
/// let step = HeatStep::new(0.1).unwrap();
/// let old = Grid2D::filled(4, 4, 2.0).unwrap();
/// let mut new = Grid2D::new(4, 4).unwrap();
/// step.apply(&old, &mut new, &Executor::sequential()).unwrap();
/// // Uniform field: zero curvature, interior unchanged.
/// assert_eq!(new[(1, 1)], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatStep {
    nu: f64,
}

impl HeatStep {
    /// Create a stepper with diffusion coefficient `nu`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidParameter`] if `nu` is negative, NaN,
    /// or infinite. The FTCS stability bound is deliberately not enforced.
    pub fn new(nu: f64) -> Result<Self, KernelError> {
        if !nu.is_finite() || nu < 0.0 {
            return Err(KernelError::InvalidParameter {
                name: "nu",
                value: nu,
            });
        }
        Ok(Self { nu })
    }

    /// The diffusion coefficient.
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Compute one time step from `old` into the interior of `new`.
    ///
    /// Grids with no interior (`nx < 3` or `ny < 3`) succeed without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::ShapeMismatch`] if the grids differ in shape.
    pub fn apply(
        &self,
        old: &Grid2D,
        new: &mut Grid2D,
        exec: &Executor,
    ) -> Result<(), KernelError> {
        if !old.same_shape(new) {
            return Err(KernelError::ShapeMismatch {
                expected: old.shape(),
                actual: new.shape(),
            });
        }
        let (nx, ny) = old.shape();
        if nx < 3 || ny < 3 {
            return Ok(());
        }

        let nu = self.nu;
        let ny_us = ny as usize;
        let prev = old.as_slice();

        // Interior rows 1..nx-1 are one contiguous block in row-major
        // storage; partition it at row granularity so every chunk holds
        // whole rows. Chunks still contain the boundary columns of each
        // row, which the body skips.
        let interior = &mut new.as_mut_slice()[ny_us..(nx as usize - 1) * ny_us];
        exec.for_each_chunk(interior, ny_us, |start, chunk| {
            // `start` is relative to the interior block; row 0 of the
            // block is global row 1.
            let first_row = 1 + start / ny_us;
            for (r, row) in chunk.chunks_mut(ny_us).enumerate() {
                let base = (first_row + r) * ny_us;
                for j in 1..ny_us - 1 {
                    let c = base + j;
                    row[j] = prev[c]
                        + nu * (prev[c - ny_us] + prev[c + ny_us] + prev[c - 1] + prev[c + 1]
                            - 4.0 * prev[c]);
                }
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calor_test_utils::{hot_center_grid, uniform_grid};

    #[test]
    fn rejects_negative_nu() {
        assert!(matches!(
            HeatStep::new(-0.1),
            Err(KernelError::InvalidParameter { name: "nu", .. })
        ));
    }

    #[test]
    fn rejects_nan_nu() {
        assert!(HeatStep::new(f64::NAN).is_err());
    }

    #[test]
    fn rejects_infinite_nu() {
        assert!(HeatStep::new(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_nu_is_valid() {
        assert_eq!(HeatStep::new(0.0).unwrap().nu(), 0.0);
    }

    #[test]
    fn rejects_shape_mismatch() {
        let step = HeatStep::new(0.1).unwrap();
        let old = Grid2D::new(4, 5).unwrap();
        let mut new = Grid2D::new(5, 4).unwrap();
        assert_eq!(
            step.apply(&old, &mut new, &Executor::sequential()),
            Err(KernelError::ShapeMismatch {
                expected: (4, 5),
                actual: (5, 4),
            })
        );
    }

    #[test]
    fn uniform_field_is_a_fixed_point() {
        let step = HeatStep::new(0.2).unwrap();
        let old = uniform_grid(6, 7, 3.5);
        let mut new = Grid2D::new(6, 7).unwrap();
        step.apply(&old, &mut new, &Executor::sequential()).unwrap();
        for i in 1..5 {
            for j in 1..6 {
                assert_eq!(new[(i, j)], 3.5, "interior cell ({i},{j}) changed");
            }
        }
    }

    #[test]
    fn boundary_is_never_written() {
        let step = HeatStep::new(0.25).unwrap();
        let old = hot_center_grid(5, 5, 0.0, 100.0);
        // Sentinel everywhere; interior gets overwritten, boundary must not.
        let mut new = uniform_grid(5, 5, -123.0);
        step.apply(&old, &mut new, &Executor::sequential()).unwrap();
        for i in 0..5u32 {
            for j in 0..5u32 {
                let boundary = i == 0 || i == 4 || j == 0 || j == 4;
                if boundary {
                    assert_eq!(new[(i, j)], -123.0, "boundary ({i},{j}) was written");
                } else {
                    assert_ne!(new[(i, j)], -123.0, "interior ({i},{j}) not written");
                }
            }
        }
    }

    #[test]
    fn hot_center_spreads_to_neighbours() {
        let step = HeatStep::new(0.1).unwrap();
        let old = hot_center_grid(5, 5, 0.0, 100.0);
        let mut new = Grid2D::new(5, 5).unwrap();
        step.apply(&old, &mut new, &Executor::sequential()).unwrap();
        assert!(new[(2, 2)] < 100.0, "center should cool: {}", new[(2, 2)]);
        assert!(new[(1, 2)] > 0.0, "north neighbour should warm");
        assert!(new[(3, 2)] > 0.0, "south neighbour should warm");
        assert!(new[(2, 1)] > 0.0, "west neighbour should warm");
        assert!(new[(2, 3)] > 0.0, "east neighbour should warm");
    }

    #[test]
    fn five_point_stencil_exact_value() {
        let step = HeatStep::new(0.1).unwrap();
        let old = Grid2D::from_fn(3, 3, |i, j| (i * 3 + j) as f64).unwrap();
        let mut new = Grid2D::new(3, 3).unwrap();
        step.apply(&old, &mut new, &Executor::sequential()).unwrap();
        // Center = 4; neighbours 1, 7, 3, 5 sum to 16; 16 - 4*4 = 0.
        assert_eq!(new[(1, 1)], 4.0);
    }

    #[test]
    fn no_interior_is_a_no_op() {
        let step = HeatStep::new(0.1).unwrap();
        for (nx, ny) in [(1, 1), (2, 5), (5, 2), (2, 2)] {
            let old = uniform_grid(nx, ny, 1.0);
            let mut new = uniform_grid(nx, ny, -7.0);
            step.apply(&old, &mut new, &Executor::worker_pool(4).unwrap())
                .unwrap();
            assert!(
                new.as_slice().iter().all(|&v| v == -7.0),
                "{nx}x{ny} grid has no interior, nothing may be written"
            );
        }
    }

    #[test]
    fn pool_matches_sequential_bitwise() {
        let step = HeatStep::new(0.2).unwrap();
        let old = Grid2D::from_fn(17, 13, |i, j| ((i * 31 + j * 17) % 7) as f64).unwrap();

        let mut seq = Grid2D::new(17, 13).unwrap();
        step.apply(&old, &mut seq, &Executor::sequential()).unwrap();

        for workers in [2, 3, 5, 8, 64] {
            let mut par = Grid2D::new(17, 13).unwrap();
            step.apply(&old, &mut par, &Executor::worker_pool(workers).unwrap())
                .unwrap();
            assert_eq!(
                seq.as_slice(),
                par.as_slice(),
                "{workers}-worker result differs from sequential"
            );
        }
    }
}
