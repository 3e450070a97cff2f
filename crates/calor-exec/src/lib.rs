//! Loop execution strategies for the Calor kernels.
//!
//! The kernels are all embarrassingly parallel: every iteration of the outer
//! loop reads shared input and writes a disjoint slot of the output. This
//! crate provides the one piece of machinery they share — an [`Executor`]
//! that runs a loop body either in the calling thread or fork-join across a
//! pool of scoped worker threads, partitioning the output into contiguous
//! chunks via [`partition::chunk_ranges`].
//!
//! The worker count is explicit per executor, never a process-global
//! setting; see [`Executor::from_env`] for the opt-in environment override.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod executor;
pub mod partition;

pub use error::ExecutorError;
pub use executor::Executor;
