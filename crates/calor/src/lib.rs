//! Calor: parallel numeric kernels for explicit finite-difference examples.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Calor sub-crates. For most users, adding `calor` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use calor::prelude::*;
//!
//! // Initialise the unit square and take one FTCS step on four workers.
//! let domain = Domain::unit_square();
//! let mut old = Grid2D::new(32, 32).unwrap();
//! let mut new = Grid2D::new(32, 32).unwrap();
//! let exec = Executor::worker_pool(4).unwrap();
//!
//! initialise(&domain, &mut old, &mut new, &exec).unwrap();
//! HeatStep::new(0.2).unwrap().apply(&old, &mut new, &exec).unwrap();
//!
//! // The boundary ring is the caller's, untouched by the step.
//! assert_eq!(new[(0, 0)], 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `calor-core` | `Grid2D`, `Domain`, error enums |
//! | [`exec`] | `calor-exec` | `Executor`, chunk partitioning |
//! | [`kernels`] | `calor-kernels` | The four numeric kernels |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core containers and error types (`calor-core`).
pub use calor_core as types;

/// Loop executors and chunk partitioning (`calor-exec`).
pub use calor_exec as exec;

/// The numeric kernels (`calor-kernels`).
pub use calor_kernels as kernels;

/// Common imports for typical Calor usage.
///
/// ```rust
/// use calor::prelude::*;
/// ```
pub mod prelude {
    pub use calor_core::{Domain, Grid2D, GridError, KernelError};
    pub use calor_exec::{Executor, ExecutorError};
    pub use calor_kernels::{array_sqrt, fibonacci, initialise, HeatStep};
}
