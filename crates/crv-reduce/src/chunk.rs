use std::ops::Range;

/// Split `0..len` into at most `workers` contiguous, non-overlapping ranges
/// of `ceil(len / workers)` items each, in index order.
///
/// The last range may be shorter. No empty range is ever produced, so an
/// empty input yields no ranges and `len < workers` yields `len` ranges of
/// one item.
pub fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let size = len.div_ceil(workers.max(1));
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}
