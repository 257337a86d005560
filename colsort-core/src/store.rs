//! Observable sort-state store.

use std::fmt;
use std::sync::Arc;

use colsort_model::{SortDirection, SortState};
use tokio::sync::watch;
use tracing::debug;

/// Observable store for a table's [`SortState`], backed by a watch channel.
///
/// Reads never lock writers out; mutations publish a whole successor state.
/// Subscribers observe the latest state only: rapid successive mutations
/// coalesce, so a receiver that reads after a burst sees one change with the
/// final state. This matches the batched-update discipline of UI
/// frameworks: a mutation is observable on the next read, and intermediate
/// states may be skipped.
///
/// The store is cheap to clone; clones share the same state.
#[derive(Clone, Debug)]
pub struct SortStateStore<K> {
    sender: Arc<watch::Sender<SortState<K>>>,
    receiver: watch::Receiver<SortState<K>>,
}

impl<K> SortStateStore<K>
where
    K: Clone + PartialEq + fmt::Debug,
{
    /// A new store in the given initial state.
    pub fn new(initial: SortState<K>) -> Self {
        let (sender, receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// The current state.
    pub fn current(&self) -> SortState<K> {
        self.receiver.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&SortState<K>) -> T,
    {
        f(&self.receiver.borrow())
    }

    /// Subscribe to state changes.
    ///
    /// The receiver starts with the current state marked as seen and yields
    /// the latest state only; updates between reads are coalesced.
    pub fn subscribe(&self) -> watch::Receiver<SortState<K>> {
        self.sender.subscribe()
    }

    /// Publish a new state.
    pub fn set(&self, state: SortState<K>) {
        // Ignore send errors (no receivers); the store keeps its own
        // receiver, so the state stays readable regardless.
        let _ = self.sender.send(state);
    }

    /// Toggle `column`: an inactive column starts ascending, the active
    /// column flips direction.
    pub fn toggle(&self, column: K) {
        let next = self.current().toggled(column);
        debug!(state = ?next, "sort toggled");
        self.set(next);
    }

    /// Sort `column` in an explicit `direction`, replacing any prior sort.
    pub fn set_sort(&self, column: K, direction: SortDirection) {
        debug!(column = ?column, direction = %direction, "sort set");
        self.set(SortState::with_sort(column, direction));
    }

    /// Return to the unsorted state.
    pub fn clear(&self) {
        debug!("sort cleared");
        self.set(SortState::cleared());
    }
}

impl<K> Default for SortStateStore<K>
where
    K: Clone + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new(SortState::Unsorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_are_visible_on_the_next_read() {
        let store = SortStateStore::default();
        assert_eq!(store.current(), SortState::Unsorted);

        store.toggle(1u32);
        assert_eq!(
            store.current(),
            SortState::with_sort(1, SortDirection::Ascending)
        );

        store.set_sort(2, SortDirection::Descending);
        assert_eq!(
            store.current(),
            SortState::with_sort(2, SortDirection::Descending)
        );

        store.clear();
        assert_eq!(store.current(), SortState::Unsorted);
    }

    #[test]
    fn clones_share_state() {
        let store = SortStateStore::default();
        let clone = store.clone();
        clone.toggle(9u32);
        assert_eq!(store.current().column(), Some(&9));
    }

    #[test]
    fn subscribers_observe_the_latest_state_only() {
        let store = SortStateStore::default();
        let mut rx = store.subscribe();

        store.toggle(1u32);
        store.toggle(1);
        store.set_sort(2, SortDirection::Descending);

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            *rx.borrow_and_update(),
            SortState::with_sort(2, SortDirection::Descending)
        );
        // The burst coalesced into a single observed change.
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscribers_wake_on_change() {
        let store = SortStateStore::default();
        let mut rx = store.subscribe();

        store.toggle(7u32);
        rx.changed().await.expect("store dropped");
        assert_eq!(rx.borrow_and_update().column(), Some(&7));
    }
}
