//! Column definitions and the comparator seam.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Orders two row values.
///
/// Implementations must follow the standard comparator contract
/// (negative/zero/positive as [`Ordering`]). The sort feature treats
/// comparators as caller-supplied logic: it never validates or wraps them,
/// and a panicking comparator propagates to the caller unchanged.
///
/// Any `Fn(&R, &R) -> Ordering` that is `Send + Sync` implements this
/// trait, so plain closures work wherever a comparator is expected; the
/// [`comparators`](crate::comparators) module builds them for common row
/// shapes.
pub trait RowComparator<R>: Send + Sync {
    /// Compare two rows.
    fn compare(&self, a: &R, b: &R) -> Ordering;
}

impl<R, F> RowComparator<R> for F
where
    F: Fn(&R, &R) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &R, b: &R) -> Ordering {
        self(a, b)
    }
}

/// Describes one sortable column: an identifying key plus an optional
/// comparator over row values.
///
/// Definitions are supplied to [`TableSort`](crate::TableSort) at
/// construction and never mutated by it. A column without a comparator can
/// still become the active sort column; ordering through it leaves rows in
/// their original order.
pub struct ColumnDefinition<K, R> {
    key: K,
    comparator: Option<Arc<dyn RowComparator<R>>>,
}

impl<K, R> ColumnDefinition<K, R> {
    /// A column with no comparator.
    pub fn new(key: K) -> Self {
        Self {
            key,
            comparator: None,
        }
    }

    /// A column ordered by `comparator`.
    pub fn with_comparator(key: K, comparator: impl RowComparator<R> + 'static) -> Self {
        Self {
            key,
            comparator: Some(Arc::new(comparator)),
        }
    }

    /// A column ordered by a plain comparison closure.
    pub fn with_compare_fn(
        key: K,
        compare: impl Fn(&R, &R) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self::with_comparator(key, compare)
    }

    /// The column's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The column's comparator, if it has one.
    pub fn comparator(&self) -> Option<&dyn RowComparator<R>> {
        self.comparator.as_deref()
    }
}

impl<K: Clone, R> Clone for ColumnDefinition<K, R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: fmt::Debug, R> fmt::Debug for ColumnDefinition<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDefinition")
            .field("key", &self.key)
            .field("sortable", &self.comparator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_comparator() {
        let column = ColumnDefinition::<u32, i64>::with_compare_fn(1, |a, b| a.cmp(b));
        let clone = column.clone();
        assert!(clone.comparator().is_some());
        assert_eq!(clone.key(), &1);
    }

    #[test]
    fn debug_reports_sortability_not_the_comparator() {
        let plain = ColumnDefinition::<u32, i64>::new(1);
        let sortable = ColumnDefinition::<u32, i64>::with_compare_fn(2, |a, b| a.cmp(b));
        assert_eq!(
            format!("{plain:?}"),
            "ColumnDefinition { key: 1, sortable: false }"
        );
        assert_eq!(
            format!("{sortable:?}"),
            "ColumnDefinition { key: 2, sortable: true }"
        );
    }
}
