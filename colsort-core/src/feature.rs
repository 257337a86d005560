//! The table sort feature: column definitions plus observable sort state.

use std::cmp::Ordering;
use std::fmt;

use colsort_model::{SortDirection, SortMessage, SortState};
use tokio::sync::watch;
use tracing::trace;

use crate::columns::{ColumnDefinition, RowComparator};
use crate::header::HeaderSortProps;
use crate::ordering;
use crate::store::SortStateStore;

/// Column-sort state and comparator-driven row ordering for one table.
///
/// `TableSort` is the single source of truth for "which column, which
/// direction". It owns the column definitions handed to it at construction
/// and an observable [`SortStateStore`]. A rendering layer reads the state
/// (or [`subscribe`](Self::subscribe)s) each update cycle, attaches
/// [`HeaderSortProps`] to header cells, and orders rows through
/// [`sorted`](Self::sorted) or [`sort_in_place`](Self::sort_in_place).
///
/// All operations are synchronous and run to completion on the caller's
/// thread; the intended discipline is the single-threaded UI update cycle:
/// mutate during event dispatch, read during view construction.
pub struct TableSort<K, R> {
    columns: Vec<ColumnDefinition<K, R>>,
    store: SortStateStore<K>,
}

impl<K, R> TableSort<K, R>
where
    K: Clone + PartialEq + fmt::Debug,
{
    /// A new feature over `columns`, initially unsorted.
    pub fn new(columns: Vec<ColumnDefinition<K, R>>) -> Self {
        Self {
            columns,
            store: SortStateStore::default(),
        }
    }

    /// Fluent construction, including an optional initial sort.
    pub fn builder() -> TableSortBuilder<K, R> {
        TableSortBuilder::new()
    }

    /// The column definitions, in the order they were supplied.
    pub fn columns(&self) -> &[ColumnDefinition<K, R>] {
        &self.columns
    }

    /// A snapshot of the current sort state.
    pub fn state(&self) -> SortState<K> {
        self.store.current()
    }

    /// The active sort column, if any.
    pub fn sort_column(&self) -> Option<K> {
        self.store.with_state(|state| state.column().cloned())
    }

    /// The active sort direction, if any column is sorted.
    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.store.with_state(|state| state.direction())
    }

    /// The direction `column` is sorted in; `None` unless `column` is the
    /// active column.
    pub fn direction_of(&self, column: &K) -> Option<SortDirection> {
        self.store.with_state(|state| state.direction_of(column))
    }

    /// `true` if `column` is the active sort column.
    pub fn is_sorted_by(&self, column: &K) -> bool {
        self.store.with_state(|state| state.is_sorted_by(column))
    }

    /// Subscribe to sort-state changes (latest-value semantics).
    pub fn subscribe(&self) -> watch::Receiver<SortState<K>> {
        self.store.subscribe()
    }

    /// Toggle sorting on `column`: an inactive column becomes the active
    /// one ascending, the active column flips direction.
    ///
    /// Keys that match no column definition are accepted; they become the
    /// active sort key and row ordering degrades to the identity.
    pub fn toggle_column_sort(&self, column: K) {
        self.store.toggle(column);
    }

    /// Sort `column` in `direction`, replacing any prior sort.
    pub fn set_column_sort(&self, column: K, direction: SortDirection) {
        self.store.set_sort(column, direction);
    }

    /// Return to the unsorted state.
    pub fn clear_sort(&self) {
        self.store.clear();
    }

    /// Dispatch a [`SortMessage`], typically one carried by
    /// [`HeaderSortProps::on_activate`].
    pub fn apply(&self, message: SortMessage<K>) {
        match message {
            SortMessage::Toggle(column) => self.toggle_column_sort(column),
            SortMessage::Set(column, direction) => self.set_column_sort(column, direction),
            SortMessage::Clear => self.clear_sort(),
        }
    }

    /// Presentation props for the header cell of `column`.
    ///
    /// Defined for every key, including ones absent from the column
    /// definitions.
    pub fn header_sort_props(&self, column: K) -> HeaderSortProps<K> {
        let sort_direction = self.direction_of(&column);
        HeaderSortProps {
            on_activate: SortMessage::Toggle(column),
            sort_direction,
        }
    }

    /// Rows reordered by the active column's comparator and direction.
    ///
    /// Returns a new vector containing the same elements; the input is
    /// never mutated. With no active column, no definition matching the
    /// active key, or a matching definition without a comparator, the rows
    /// come back in their input order. Only the active column's comparator
    /// is invoked, exactly as often as the underlying stable sort requires.
    pub fn sorted(&self, rows: &[R]) -> Vec<R>
    where
        R: Clone,
    {
        let mut out = rows.to_vec();
        self.sort_in_place(&mut out);
        out
    }

    /// Reorder `rows` in place with the same semantics as
    /// [`sorted`](Self::sorted); identity cases leave the slice untouched.
    pub fn sort_in_place(&self, rows: &mut [R]) {
        match self.active_comparator() {
            Some((comparator, direction)) => {
                ordering::sort_slice(rows, comparator, direction);
            }
            None => trace!("no active comparator, rows keep their order"),
        }
    }

    /// The comparator and direction to order rows with right now, if the
    /// active column resolves to a comparator-bearing definition. Lookup
    /// takes the first definition whose key matches.
    fn active_comparator(&self) -> Option<(&dyn RowComparator<R>, SortDirection)> {
        self.store.with_state(|state| {
            let column = state.column()?;
            let direction = state.direction()?;
            let definition = self.columns.iter().find(|def| def.key() == column)?;
            Some((definition.comparator()?, direction))
        })
    }
}

impl<K: fmt::Debug, R> fmt::Debug for TableSort<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSort")
            .field("columns", &self.columns)
            .field("store", &self.store)
            .finish()
    }
}

/// Fluent construction for [`TableSort`].
pub struct TableSortBuilder<K, R> {
    columns: Vec<ColumnDefinition<K, R>>,
    initial: SortState<K>,
}

impl<K, R> TableSortBuilder<K, R>
where
    K: Clone + PartialEq + fmt::Debug,
{
    /// An empty builder: no columns, initially unsorted.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            initial: SortState::Unsorted,
        }
    }

    /// Add a column with no comparator.
    pub fn column(mut self, key: K) -> Self {
        self.columns.push(ColumnDefinition::new(key));
        self
    }

    /// Add a column ordered by `comparator`.
    pub fn column_with(mut self, key: K, comparator: impl RowComparator<R> + 'static) -> Self {
        self.columns
            .push(ColumnDefinition::with_comparator(key, comparator));
        self
    }

    /// Add a column ordered by a plain comparison closure.
    pub fn column_with_fn(
        mut self,
        key: K,
        compare: impl Fn(&R, &R) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.columns
            .push(ColumnDefinition::with_compare_fn(key, compare));
        self
    }

    /// Start sorted on `column` in `direction` instead of unsorted.
    pub fn initial_sort(mut self, column: K, direction: SortDirection) -> Self {
        self.initial = SortState::with_sort(column, direction);
        self
    }

    /// Build the feature.
    pub fn build(self) -> TableSort<K, R> {
        TableSort {
            columns: self.columns,
            store: SortStateStore::new(self.initial),
        }
    }
}

impl<K, R> Default for TableSortBuilder<K, R>
where
    K: Clone + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, R> fmt::Debug for TableSortBuilder<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSortBuilder")
            .field("columns", &self.columns)
            .field("initial", &self.initial)
            .finish()
    }
}
