//! Benchmark profiles and utilities for the Calor kernel library.
//!
//! Provides pre-built solve profiles and deterministic input generation for
//! benchmarks and examples:
//!
//! - [`reference_profile`]: 129x129 grid, 200 FTCS steps at `nu = 0.2`
//! - [`stress_profile`]: 513x513 grid (~263K cells), same step count
//! - [`seeded_input`]: reproducible pseudo-random arrays via a seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use calor_core::{Domain, Grid2D};
use calor_exec::Executor;
use calor_kernels::{initialise, HeatStep};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Parameters of one heat-equation solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveProfile {
    /// Grid points per axis.
    pub n: u32,
    /// Diffusion coefficient per step (must stay within the FTCS bound).
    pub nu: f64,
    /// Number of time steps.
    pub steps: usize,
}

/// Reference profile: 129x129 grid (~16K cells), 200 steps at `nu = 0.2`.
pub fn reference_profile() -> SolveProfile {
    SolveProfile {
        n: 129,
        nu: 0.2,
        steps: 200,
    }
}

/// Stress profile: 513x513 grid (~263K cells), same pipeline at 16x the
/// cell count.
pub fn stress_profile() -> SolveProfile {
    SolveProfile {
        n: 513,
        nu: 0.2,
        steps: 200,
    }
}

/// Run a profile on the unit square, ping-ponging the two grids.
///
/// Returns the grid holding the final field.
pub fn run_solve(profile: SolveProfile, exec: &Executor) -> Grid2D {
    let domain = Domain::unit_square();
    let mut old = Grid2D::new(profile.n, profile.n).expect("profile dimensions are valid");
    let mut new = Grid2D::new(profile.n, profile.n).expect("profile dimensions are valid");
    initialise(&domain, &mut old, &mut new, exec).expect("profile grids are well formed");

    let step = HeatStep::new(profile.nu).expect("profile nu is valid");
    for _ in 0..profile.steps {
        step.apply(&old, &mut new, exec).expect("shapes match");
        std::mem::swap(&mut old, &mut new);
    }
    old
}

/// Generate `len` deterministic pseudo-random values in `[0, 1e6)`.
///
/// Same seed, same array, so sequential and pooled benchmark runs see
/// identical inputs.
pub fn seeded_input(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<f64>() * 1e6).collect()
}
