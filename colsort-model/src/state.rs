//! The sort-state machine.

use crate::SortDirection;

/// Which column a table is sorted by, and in which direction.
///
/// At most one column is active at a time; activating a new column replaces
/// the previous one. `SortState` is a plain value: transitions return the
/// successor state and leave `self` untouched, so a store can publish whole
/// states atomically.
///
/// The column key type `K` is opaque to this crate; anything comparable by
/// equality works. Keys that the owning table has no definition for are
/// still valid sort columns; they simply order nothing at sort time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortState<K> {
    /// No column is sorted.
    Unsorted,
    /// `column` is sorted in `direction`.
    Sorted {
        /// The active sort column.
        column: K,
        /// The direction it is sorted in.
        direction: SortDirection,
    },
}

impl<K> Default for SortState<K> {
    fn default() -> Self {
        SortState::Unsorted
    }
}

impl<K> SortState<K> {
    /// An explicit sorted state.
    pub fn with_sort(column: K, direction: SortDirection) -> Self {
        SortState::Sorted { column, direction }
    }

    /// The unsorted state.
    pub fn cleared() -> Self {
        SortState::Unsorted
    }

    /// The active sort column, if any.
    pub fn column(&self) -> Option<&K> {
        match self {
            SortState::Sorted { column, .. } => Some(column),
            SortState::Unsorted => None,
        }
    }

    /// The active sort direction, if any column is sorted.
    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Sorted { direction, .. } => Some(*direction),
            SortState::Unsorted => None,
        }
    }
}

impl<K: PartialEq> SortState<K> {
    /// `true` if `column` is the active sort column.
    pub fn is_sorted_by(&self, column: &K) -> bool {
        self.column() == Some(column)
    }

    /// The direction `column` is sorted in.
    ///
    /// `None` unless `column` is the active column, never the direction of
    /// a different column, even while one is actively sorted.
    pub fn direction_of(&self, column: &K) -> Option<SortDirection> {
        match self {
            SortState::Sorted { column: active, direction } if active == column => {
                Some(*direction)
            }
            _ => None,
        }
    }

    /// Successor state for a header activation on `column`.
    ///
    /// A column that is not the active one becomes active, ascending. The
    /// active column flips direction. Toggling cycles between ascending and
    /// descending; it never returns to [`SortState::Unsorted`].
    pub fn toggled(&self, column: K) -> Self {
        match self {
            SortState::Sorted { column: active, direction } if *active == column => {
                SortState::Sorted {
                    column,
                    direction: direction.flipped(),
                }
            }
            _ => SortState::Sorted {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }
}
