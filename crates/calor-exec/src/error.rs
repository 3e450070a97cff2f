//! Error type for executor construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Executor`](crate::Executor) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutorError {
    /// A worker pool needs at least one worker.
    ZeroWorkers,
    /// The environment override is set but not a positive integer.
    InvalidEnvOverride {
        /// The unparseable value.
        value: String,
    },
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker pool requires at least one worker"),
            Self::InvalidEnvOverride { value } => {
                write!(f, "CALOR_WORKERS must be a positive integer, got '{value}'")
            }
        }
    }
}

impl Error for ExecutorError {}
