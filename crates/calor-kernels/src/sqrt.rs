//! Element-wise square root over a 1D array.

use calor_core::KernelError;
use calor_exec::Executor;

/// Set `out[i] = sqrt(input[i])` for every `i`.
///
/// Negative inputs follow IEEE 754: the result is NaN, never an error. The
/// worker-pool executor partitions the index range into contiguous chunks,
/// one per worker; every iteration reads one input slot and writes one
/// disjoint output slot, so no synchronization is needed beyond the join.
///
/// The original C routine called `omp_set_num_threads` — a process-global
/// side effect — to honour its thread-count argument; here the count lives
/// in the executor and is scoped to the call.
///
/// # Errors
///
/// Returns [`KernelError::LengthMismatch`] if the arrays differ in length.
///
/// # Examples
///
/// ```
/// use calor_exec::Executor;
/// use calor_kernels::array_sqrt;
///
/// let input = [0.0, 1.0, 4.0, 9.0, 16.0];
/// let mut out = [0.0; 5];
/// array_sqrt(&input, &mut out, &Executor::worker_pool(2).unwrap()).unwrap();
/// assert_eq!(out, [0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn array_sqrt(input: &[f64], out: &mut [f64], exec: &Executor) -> Result<(), KernelError> {
    if input.len() != out.len() {
        return Err(KernelError::LengthMismatch {
            input: input.len(),
            output: out.len(),
        });
    }
    exec.for_each_chunk(out, 1, |start, chunk| {
        for (k, v) in chunk.iter_mut().enumerate() {
            *v = input[start + k].sqrt();
        }
    });
    Ok(())
}
