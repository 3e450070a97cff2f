//! Sequential and worker-pool loop execution.

use crate::error::ExecutorError;
use crate::partition::chunk_ranges;
use std::num::NonZeroUsize;

/// Environment variable consulted by [`Executor::from_env`].
pub const WORKERS_ENV: &str = "CALOR_WORKERS";

/// Execution strategy for an embarrassingly parallel loop.
///
/// The two variants run the identical loop body; the pool partitions the
/// output into contiguous chunks, one per worker, and joins all workers
/// before returning. Worker count is per-executor state, so two calls with
/// different executors never interfere (unlike a process-global thread-count
/// setting).
///
/// # Examples
///
/// ```
/// use calor_exec::Executor;
///
/// let mut out = vec![0.0f64; 8];
/// let exec = Executor::worker_pool(3).unwrap();
/// exec.for_each_chunk(&mut out, 1, |start, chunk| {
///     for (k, v) in chunk.iter_mut().enumerate() {
///         *v = (start + k) as f64;
///     }
/// });
/// assert_eq!(out, [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Executor {
    /// Run the loop body in the calling thread.
    Sequential,
    /// Fork-join across a pool of scoped worker threads.
    WorkerPool {
        /// Number of worker threads to partition the loop across.
        workers: NonZeroUsize,
    },
}

impl Executor {
    /// A strictly single-threaded executor.
    pub fn sequential() -> Self {
        Self::Sequential
    }

    /// A pool of `workers` threads. Rejects `workers == 0`.
    pub fn worker_pool(workers: usize) -> Result<Self, ExecutorError> {
        let workers = NonZeroUsize::new(workers).ok_or(ExecutorError::ZeroWorkers)?;
        Ok(Self::WorkerPool { workers })
    }

    /// A pool sized to the host's available parallelism, falling back to
    /// sequential when that cannot be determined.
    pub fn host_parallel() -> Self {
        match std::thread::available_parallelism() {
            Ok(workers) => Self::WorkerPool { workers },
            Err(_) => Self::Sequential,
        }
    }

    /// Build an executor from the `CALOR_WORKERS` environment variable.
    ///
    /// Unset: sequential. `1`: sequential. `n > 1`: a pool of `n` workers.
    /// Anything else that is set — zero, garbage, non-unicode bytes — is
    /// [`ExecutorError::InvalidEnvOverride`], never a silent fallback. The
    /// variable is read once, here; the resulting executor carries the
    /// count and is unaffected by later environment changes.
    pub fn from_env() -> Result<Self, ExecutorError> {
        match std::env::var(WORKERS_ENV) {
            Err(std::env::VarError::NotPresent) => Ok(Self::Sequential),
            Err(std::env::VarError::NotUnicode(raw)) => {
                Err(ExecutorError::InvalidEnvOverride {
                    value: raw.to_string_lossy().into_owned(),
                })
            }
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(0) | Err(_) => Err(ExecutorError::InvalidEnvOverride { value }),
                Ok(1) => Ok(Self::Sequential),
                Ok(n) => Self::worker_pool(n),
            },
        }
    }

    /// Number of threads this executor will use.
    pub fn workers(&self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::WorkerPool { workers } => workers.get(),
        }
    }

    /// Run `body` over `out`, partitioned into contiguous chunks of whole
    /// `unit`-element blocks.
    ///
    /// `unit` is the indivisible block size: 1 for element-wise loops, the
    /// row length for row-wise grid loops. `out.len()` must be a multiple of
    /// `unit`. The body receives the flat offset of its chunk within `out`
    /// and the chunk itself; chunks are disjoint, so no iteration writes
    /// another iteration's slot and no synchronization beyond the final join
    /// is needed. Iteration order across workers is unspecified.
    pub fn for_each_chunk<F>(&self, out: &mut [f64], unit: usize, body: F)
    where
        F: Fn(usize, &mut [f64]) + Sync,
    {
        debug_assert!(unit > 0, "unit must be positive");
        debug_assert_eq!(out.len() % unit, 0, "out must hold whole units");

        if out.is_empty() {
            return;
        }
        let workers = match self {
            Self::Sequential => {
                body(0, out);
                return;
            }
            Self::WorkerPool { workers } => workers.get(),
        };

        let units = out.len() / unit;
        let chunks = chunk_ranges(units, workers);
        if chunks.len() <= 1 {
            body(0, out);
            return;
        }

        std::thread::scope(|scope| {
            let body = &body;
            let mut rest = out;
            let mut offset = 0;
            for range in chunks {
                let elems = range.len() * unit;
                let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(elems);
                rest = tail;
                let start = offset;
                scope.spawn(move || body(start, chunk));
                offset += elems;
            }
        });
    }
}
