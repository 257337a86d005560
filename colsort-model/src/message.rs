//! Sort mutations as dispatchable values.

use crate::SortDirection;

/// A sort mutation a header cell hands back to the host event loop.
///
/// Header presentation props carry a `SortMessage` as their activation
/// value instead of a callback; the host dispatches it into the sort
/// feature during event handling. This keeps header cells free of
/// closures and fits message-driven UI loops directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortMessage<K> {
    /// Toggle sorting on a column: an inactive column starts ascending,
    /// the active column flips direction.
    Toggle(K),
    /// Sort a column in an explicit direction, replacing any prior sort.
    Set(K, SortDirection),
    /// Return to the unsorted state.
    Clear,
}
