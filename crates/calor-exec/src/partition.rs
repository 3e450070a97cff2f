//! Contiguous chunk partitioning of a loop index range.

use smallvec::SmallVec;
use std::ops::Range;

/// Split `0..len` into at most `workers` contiguous, non-empty chunks.
///
/// Chunk sizes differ by at most one: the first `len % workers` chunks get
/// the extra element (static partitioning). Returns fewer than `workers`
/// chunks when `len < workers`, and no chunks for an empty range.
///
/// # Examples
///
/// ```
/// use calor_exec::partition::chunk_ranges;
///
/// let chunks = chunk_ranges(10, 4);
/// assert_eq!(chunks.as_slice(), &[0..3, 3..6, 6..8, 8..10]);
/// ```
pub fn chunk_ranges(len: usize, workers: usize) -> SmallVec<[Range<usize>; 8]> {
    let mut chunks = SmallVec::new();
    if len == 0 || workers == 0 {
        return chunks;
    }
    let n = workers.min(len);
    let base = len / n;
    let extra = len % n;
    let mut start = 0;
    for k in 0..n {
        let size = base + usize::from(k < extra);
        chunks.push(start..start + size);
        start += size;
    }
    chunks
}
