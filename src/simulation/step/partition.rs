use std::ops::Range;

use crate::spatial::grid::CellState;

/// Contiguous index ranges covering `0..total` exactly once.
///
/// Boundaries are `i * total / partitions`, so partitions differ in size by at
/// most one cell and the last one always ends at `total`. Partitions may be
/// empty when `partitions > total`.
pub fn partition_bounds(total: usize, partitions: usize) -> Vec<Range<usize>> {
    let partitions = partitions.max(1);
    let boundary = |i: usize| ((i as u128 * total as u128) / partitions as u128) as usize;
    (0..partitions).map(|i| boundary(i)..boundary(i + 1)).collect()
}

/// Carve `next` into one exclusive slice per range, tagged with its start.
pub(super) fn split_partitions<'a>(
    next: &'a mut [CellState],
    ranges: &[Range<usize>],
) -> Vec<(usize, &'a mut [CellState])> {
    let mut parts = Vec::with_capacity(ranges.len());
    let mut rest = next;
    let mut consumed = 0usize;
    for range in ranges {
        debug_assert_eq!(range.start, consumed, "partitions must be contiguous");
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        parts.push((range.start, head));
        rest = tail;
        consumed = range.end;
    }
    debug_assert!(rest.is_empty(), "partitions must cover the whole grid");
    parts
}
