//! Core types for the Calor kernel library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! owned, length-tagged containers the kernels operate on ([`Grid2D`],
//! [`Domain`]) and the error types ([`GridError`], [`KernelError`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod grid;

pub use domain::Domain;
pub use error::{GridError, KernelError};
pub use grid::Grid2D;
