//! Headless column-sort state management for table UIs.
//!
//! This crate provides:
//! - [`TableSort`], the single source of truth for "which column, which
//!   direction" plus comparator-driven row ordering
//! - [`SortStateStore`], an observable sort-state cell with coalescing
//!   latest-value reads
//! - [`HeaderSortProps`], the presentation bundle a rendering layer
//!   attaches to a sortable header cell
//! - comparator constructors for common row shapes
//!
//! The crate is framework-agnostic: header activations are plain
//! [`SortMessage`] values the host dispatches back through
//! [`TableSort::apply`], and the rendering layer decides what an
//! "activation" is (a click, a key press, a tap).
//!
//! ```
//! use colsort_core::{comparators, TableSort};
//!
//! #[derive(Clone)]
//! struct Row {
//!     name: String,
//! }
//!
//! let sort = TableSort::builder()
//!     .column_with("name", comparators::by_key(|row: &Row| row.name.clone()))
//!     .build();
//!
//! let header = sort.header_sort_props("name");
//! sort.apply(header.on_activate); // first activation sorts ascending
//!
//! let rows = vec![Row { name: "b".into() }, Row { name: "a".into() }];
//! let sorted = sort.sorted(&rows);
//! assert_eq!(sorted[0].name, "a");
//! ```

pub mod columns;
pub mod comparators;
pub mod feature;
pub mod header;
pub mod ordering;
pub mod store;


pub use colsort_model::{ParseDirectionError, SortDirection, SortMessage, SortState};
pub use columns::{ColumnDefinition, RowComparator};
pub use feature::{TableSort, TableSortBuilder};
pub use header::HeaderSortProps;
pub use store::SortStateStore;

// Subscribers are plain watch receivers; re-export the module so hosts can
// name the type without depending on tokio directly.
pub use tokio::sync::watch;
