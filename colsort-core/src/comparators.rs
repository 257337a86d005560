//! Comparator constructors for common row shapes.
//!
//! All `Option`-keyed constructors use the missing-last convention: rows
//! with a present key order among themselves, rows missing it sort after
//! them, and two missing keys compare equal. Direction is applied by the
//! sort feature through comparator-argument swapping, so a descending sort
//! also flips where missing keys land.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::columns::RowComparator;

/// Compare rows by a totally ordered key.
pub fn by_key<R, T, F>(extract: F) -> impl RowComparator<R> + 'static
where
    R: 'static,
    T: Ord + 'static,
    F: Fn(&R) -> T + Send + Sync + 'static,
{
    move |a: &R, b: &R| extract(a).cmp(&extract(b))
}

/// Compare rows by an optional key; rows missing the key sort last.
pub fn by_optional_key<R, T, F>(extract: F) -> impl RowComparator<R> + 'static
where
    R: 'static,
    T: Ord + 'static,
    F: Fn(&R) -> Option<T> + Send + Sync + 'static,
{
    move |a: &R, b: &R| compare_optional(extract(a), extract(b))
}

/// Compare rows by an optional float key; rows missing the key sort last.
///
/// Floats are wrapped in [`OrderedFloat`] for a total order, so NaN is an
/// ordinary (largest) value rather than a comparator-contract violation.
pub fn by_float_key<R, F>(extract: F) -> impl RowComparator<R> + 'static
where
    R: 'static,
    F: Fn(&R) -> Option<f32> + Send + Sync + 'static,
{
    move |a: &R, b: &R| {
        compare_optional(extract(a).map(OrderedFloat), extract(b).map(OrderedFloat))
    }
}

fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
