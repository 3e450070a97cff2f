//! Heat-equation demo driver.
//!
//! Initialises the unit square with the separable sine field, runs the
//! reference FTCS solve sequentially and on a worker pool, and reports the
//! wall time of each together with the peak amplitude against the analytic
//! decay `exp(-2 * pi^2 * t)`.
//!
//! Worker count comes from `CALOR_WORKERS` (default: host parallelism).

use calor_bench::{reference_profile, run_solve};
use calor_exec::{Executor, ExecutorError};
use std::time::Instant;

fn main() -> Result<(), ExecutorError> {
    let profile = reference_profile();
    let pool = match Executor::from_env()? {
        // Unset: pick a real pool so the comparison is interesting.
        Executor::Sequential => Executor::host_parallel(),
        pool => pool,
    };

    println!(
        "FTCS heat solve: {n}x{n} grid, nu = {nu}, {steps} steps",
        n = profile.n,
        nu = profile.nu,
        steps = profile.steps,
    );

    let t0 = Instant::now();
    let seq = run_solve(profile, &Executor::sequential());
    let seq_elapsed = t0.elapsed();

    let t0 = Instant::now();
    let par = run_solve(profile, &pool);
    let par_elapsed = t0.elapsed();

    assert_eq!(
        seq.as_slice(),
        par.as_slice(),
        "pool result diverged from sequential"
    );

    // Time advanced per step is nu * dx^2 (unit diffusivity); the continuum
    // solution decays the initial field by exp(-2 * pi^2 * t).
    let dx = 1.0 / f64::from(profile.n - 1);
    let t = profile.steps as f64 * profile.nu * dx * dx;
    let analytic_peak = (-2.0 * std::f64::consts::PI.powi(2) * t).exp();
    let center = profile.n / 2;
    let computed_peak = seq[(center, center)];

    println!(
        "sequential: {seq_elapsed:?}   pool ({} workers): {par_elapsed:?}",
        pool.workers()
    );
    println!(
        "peak amplitude: computed {computed_peak:.6}, analytic {analytic_peak:.6} \
         (rel. err. {:.2e})",
        ((computed_peak - analytic_peak) / analytic_peak).abs()
    );
    Ok(())
}
