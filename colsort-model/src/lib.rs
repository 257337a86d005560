//! Shared sort-state types for the colsort table crates.
//!
//! Everything in this crate is a plain value: the [`SortDirection`] of an
//! active sort, the [`SortState`] machine tracking which column is sorted,
//! and the [`SortMessage`] values header cells hand back to a host event
//! loop. Behavior (stores, comparators, row ordering) lives in
//! `colsort-core`.

pub mod direction;
pub mod error;
pub mod message;
pub mod state;

// Intentionally curated re-exports for downstream consumers.
pub use direction::SortDirection;
pub use error::ParseDirectionError;
pub use message::SortMessage;
pub use state::SortState;
