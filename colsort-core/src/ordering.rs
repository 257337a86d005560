//! Applying a comparator and direction to row sequences.

use std::cmp::Ordering;

use colsort_model::SortDirection;

use crate::columns::RowComparator;

/// A single directed comparison.
///
/// Descending swaps the comparator's arguments rather than negating or
/// reversing anything downstream, which keeps tie-break behavior of
/// non-strict comparators intact.
pub fn compare_in<R>(
    comparator: &dyn RowComparator<R>,
    direction: SortDirection,
    a: &R,
    b: &R,
) -> Ordering {
    match direction {
        SortDirection::Ascending => comparator.compare(a, b),
        SortDirection::Descending => comparator.compare(b, a),
    }
}

/// Stable-sort `rows` in place with `comparator` applied in `direction`.
///
/// Rows that compare equal keep their input order in both directions,
/// because descending is an argument swap, not a reversal of the sorted
/// output.
pub fn sort_slice<R>(
    rows: &mut [R],
    comparator: &dyn RowComparator<R>,
    direction: SortDirection,
) {
    rows.sort_by(|a, b| compare_in(comparator, direction, a, b));
}
