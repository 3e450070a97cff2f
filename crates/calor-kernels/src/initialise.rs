//! Sinusoidal initial condition for the heat-equation grids.

use calor_core::{Domain, Grid2D, KernelError};
use calor_exec::Executor;

/// Fill `old` with the initial field and zero `new`.
///
/// With `dx = (xmax - xmin) / (nx - 1)` and `dy = (ymax - ymin) / (ny - 1)`,
/// every cell of `old`, boundaries included, is set to
///
/// ```text
/// old[i][j] = sin(i * dx * pi) * sin(j * dy * pi)
/// ```
///
/// and every cell of `new` to zero. On the unit square this is the classic
/// separable initial condition whose analytic solution under the heat
/// equation decays as `exp(-2 * pi^2 * t)`. Note the faithful quirk kept
/// from the original routine: the grid *index* multiplies the spacing, so
/// `xmin`/`ymin` shift the spacing but never offset the argument.
///
/// The row loop runs under `exec` exactly like the stepper's.
///
/// # Errors
///
/// - [`KernelError::ShapeMismatch`] if the grids differ in shape.
/// - [`KernelError::DegenerateAxis`] if either axis has fewer than two
///   points, which would divide by zero in the spacing (the original
///   routine's latent defect, upgraded to a checked error).
pub fn initialise(
    domain: &Domain,
    old: &mut Grid2D,
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
    let (dx, dy) = domain.spacing(nx, ny)?;

    let ny_us = ny as usize;
    exec.for_each_chunk(old.as_mut_slice(), ny_us, |start, chunk| {
        let first_row = start / ny_us;
        for (r, row) in chunk.chunks_mut(ny_us).enumerate() {
            let i = (first_row + r) as f64;
            let si = (i * dx * std::f64::consts::PI).sin();
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = si * (j as f64 * dy * std::f64::consts::PI).sin();
            }
        }
    });
    new.fill(0.0);
    Ok(())
}
