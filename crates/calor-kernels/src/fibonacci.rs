//! Fibonacci sequence filler.

use calor_core::KernelError;

/// Fill `out[0..n]` with the Fibonacci sequence `1, 1, 2, 3, 5, ...`.
///
/// Slots at index `n` and beyond are never touched. `n == 0` is a no-op and
/// `n == 1` writes only `out[0]`.
///
/// # Errors
///
/// - [`KernelError::BufferTooSmall`] if `out.len() < n`. The C original
///   wrote past the end of an undersized buffer; here the length is part of
///   the slice, so the violation is a checked error.
/// - [`KernelError::Overflow`] if an element does not fit in `u64`, which
///   first happens at index 93. The failing slot and everything after it
///   are left untouched.
///
/// # Examples
///
/// ```
/// use calor_kernels::fibonacci;
///
/// let mut buf = [0u64; 6];
/// fibonacci(6, &mut buf).unwrap();
/// assert_eq!(buf, [1, 1, 2, 3, 5, 8]);
/// ```
pub fn fibonacci(n: usize, out: &mut [u64]) -> Result<(), KernelError> {
    if out.len() < n {
        return Err(KernelError::BufferTooSmall {
            needed: n,
            len: out.len(),
        });
    }
    if n >= 1 {
        out[0] = 1;
    }
    if n >= 2 {
        out[1] = 1;
    }
    for i in 2..n {
        out[i] = out[i - 1]
            .checked_add(out[i - 2])
            .ok_or(KernelError::Overflow { index: i })?;
    }
    Ok(())
}
