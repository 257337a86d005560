//! Header-cell presentation props.

use colsort_model::{SortDirection, SortMessage};

/// The attribute bundle a rendering layer attaches to a sortable header
/// cell.
///
/// `on_activate` is a plain message value rather than a callback: the
/// rendering layer wires it to whatever its activation event is (a click,
/// a key press) and dispatches it back through
/// [`TableSort::apply`](crate::TableSort::apply). Props exist for every
/// column key, including keys the table has no definition for: such a
/// cell still toggles, its direction just reads `None` until it becomes
/// the active column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSortProps<K> {
    /// Message to dispatch when the cell is activated. Dispatching it is
    /// equivalent to toggling this column directly.
    pub on_activate: SortMessage<K>,
    /// The current direction if this cell's column is the active sort
    /// column, otherwise `None`, never another column's direction.
    pub sort_direction: Option<SortDirection>,
}

impl<K> HeaderSortProps<K> {
    /// Value for the cell's `aria-sort` attribute.
    pub fn aria_sort(&self) -> &'static str {
        match self.sort_direction {
            Some(direction) => direction.as_str(),
            None => "none",
        }
    }
}
