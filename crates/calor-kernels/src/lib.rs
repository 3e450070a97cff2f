//! Reference numeric kernels for the Calor library.
//!
//! Four standalone routines of the kind wrapped as native extension modules
//! for interpreted numeric environments:
//!
//! - [`fibonacci`] — fill a buffer with the Fibonacci sequence.
//! - [`HeatStep`] — one explicit FTCS time step of the 2D heat equation.
//! - [`initialise`] — sinusoidal initial field plus a zeroed work grid.
//! - [`array_sqrt`] — element-wise square root, optionally data-parallel.
//!
//! The kernels share no state and form no pipeline. Each validates its
//! preconditions (buffer lengths, grid shapes, parameter ranges) and returns
//! a [`KernelError`](calor_core::KernelError) on violation; the parallel
//! ones take an [`Executor`](calor_exec::Executor) selecting sequential or
//! worker-pool execution of the same loop body.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fibonacci;
pub mod initialise;
pub mod sqrt;
pub mod stepper;

pub use fibonacci::fibonacci;
pub use initialise::initialise;
pub use sqrt::array_sqrt;
pub use stepper::HeatStep;
