//! The compare store.

use std::sync::mpsc::Receiver;

use crate::notify::{SubscriptionId, Subscribers};
use crate::property::PropertyId;

/// Default maximum number of properties compared at once.
pub const DEFAULT_COMPARE_LIMIT: usize = 4;

/// Outcome of a compare mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    /// The id was appended.
    Added,
    /// The id was removed.
    Removed,
    /// The id was already selected; nothing changed.
    AlreadyPresent,
    /// The selection is full; nothing changed.
    Rejected { limit: usize },
}

impl CompareToggle {
    /// Check whether the id is selected after the operation.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Added | Self::AlreadyPresent)
    }
}

/// A change to the compare selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareEvent {
    Added(PropertyId),
    Removed(PropertyId),
    Rejected { id: PropertyId, limit: usize },
    Cleared,
}

/// Ordered, unique, size-bounded list of property ids.
#[derive(Debug)]
pub struct CompareStore {
    ids: Vec<PropertyId>,
    limit: usize,
    subscribers: Subscribers<CompareEvent>,
}

impl CompareStore {
    /// Create an empty store with the default limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_COMPARE_LIMIT)
    }

    /// Create an empty store holding at most `limit` ids (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            ids: Vec::new(),
            limit: limit.max(1),
            subscribers: Subscribers::new(),
        }
    }

    /// Remove the id if selected, otherwise append it if there is room.
    pub fn toggle(&mut self, id: impl Into<PropertyId>) -> CompareToggle {
        let id = id.into();
        if self.contains(id.as_str()) {
            self.remove(id.as_str());
            CompareToggle::Removed
        } else {
            self.append(id)
        }
    }

    /// Append the id if there is room. Selected ids are left in place.
    pub fn add(&mut self, id: impl Into<PropertyId>) -> CompareToggle {
        let id = id.into();
        if self.contains(id.as_str()) {
            CompareToggle::AlreadyPresent
        } else {
            self.append(id)
        }
    }

    /// Remove the id. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.ids.iter().position(|i| i.as_str() == id) else {
            return false;
        };
        let removed = self.ids.remove(pos);
        self.subscribers.notify(&CompareEvent::Removed(removed));
        true
    }

    /// Check whether the id is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i.as_str() == id)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.subscribers.notify(&CompareEvent::Cleared);
    }

    /// Selected ids in the order they were added.
    pub fn ids(&self) -> &[PropertyId] {
        &self.ids
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check whether no more ids can be added.
    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.limit
    }

    /// Maximum number of selected ids.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Comma-separated ids for `GET /properties/compare?ids=`.
    pub fn query_value(&self) -> String {
        self.ids
            .iter()
            .map(PropertyId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Register a callback for every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CompareEvent) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Register a channel for every change.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<CompareEvent>) {
        self.subscribers.subscribe_channel()
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn append(&mut self, id: PropertyId) -> CompareToggle {
        if self.is_full() {
            tracing::debug!("Compare list full ({}), rejecting {}", self.limit, id);
            self.subscribers.notify(&CompareEvent::Rejected {
                id,
                limit: self.limit,
            });
            return CompareToggle::Rejected { limit: self.limit };
        }

        self.ids.push(id.clone());
        self.subscribers.notify(&CompareEvent::Added(id));
        CompareToggle::Added
    }
}

impl Default for CompareStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_symmetric_on_empty_store() {
        let mut store = CompareStore::new();
        assert!(!store.contains("p1"));

        assert_eq!(store.toggle("p1"), CompareToggle::Added);
        assert!(store.contains("p1"));

        assert_eq!(store.toggle("p1"), CompareToggle::Removed);
        assert!(!store.contains("p1"));
        assert!(store.is_empty());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut store = CompareStore::new();
        store.toggle("c");
        store.toggle("a");
        store.toggle("b");
        store.toggle("a");
        store.toggle("a");

        let ids: Vec<_> = store.ids().iter().map(PropertyId::as_str).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn rejects_newest_when_full() {
        let mut store = CompareStore::with_limit(2);
        store.toggle("p1");
        store.toggle("p2");
        assert!(store.is_full());

        assert_eq!(store.toggle("p3"), CompareToggle::Rejected { limit: 2 });
        assert!(!store.contains("p3"));
        assert_eq!(store.len(), 2);

        // Removing still works when full.
        assert_eq!(store.toggle("p1"), CompareToggle::Removed);
        assert_eq!(store.toggle("p3"), CompareToggle::Added);
    }

    #[test]
    fn default_limit_is_four() {
        let mut store = CompareStore::default();
        assert_eq!(store.limit(), DEFAULT_COMPARE_LIMIT);

        for id in ["a", "b", "c", "d"] {
            assert_eq!(store.add(id), CompareToggle::Added);
        }
        assert_eq!(store.add("e"), CompareToggle::Rejected { limit: 4 });
    }

    #[test]
    fn limit_is_at_least_one() {
        let mut store = CompareStore::with_limit(0);
        assert_eq!(store.limit(), 1);
        assert_eq!(store.toggle("p1"), CompareToggle::Added);
    }

    #[test]
    fn add_does_not_remove_present_ids() {
        let mut store = CompareStore::new();
        store.add("p1");
        assert_eq!(store.add("p1"), CompareToggle::AlreadyPresent);
        assert!(store.contains("p1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_reports_membership() {
        let mut store = CompareStore::new();
        store.add("p1");
        assert!(store.remove("p1"));
        assert!(!store.remove("p1"));
    }

    #[test]
    fn clear_resets() {
        let mut store = CompareStore::new();
        store.add("p1");
        store.add("p2");
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.query_value(), "");
    }

    #[test]
    fn query_value_joins_with_commas() {
        let mut store = CompareStore::new();
        store.add("p1");
        store.add("p2");
        store.add("p3");
        assert_eq!(store.query_value(), "p1,p2,p3");
    }

    #[test]
    fn is_selected_reflects_outcome() {
        assert!(CompareToggle::Added.is_selected());
        assert!(CompareToggle::AlreadyPresent.is_selected());
        assert!(!CompareToggle::Removed.is_selected());
        assert!(!CompareToggle::Rejected { limit: 4 }.is_selected());
    }

    #[test]
    fn subscribers_see_changes_and_rejections() {
        let mut store = CompareStore::with_limit(1);
        let (_, rx) = store.subscribe_channel();

        store.toggle("p1");
        store.toggle("p2");
        store.toggle("p1");
        store.clear();

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                CompareEvent::Added(PropertyId::new("p1")),
                CompareEvent::Rejected {
                    id: PropertyId::new("p2"),
                    limit: 1
                },
                CompareEvent::Removed(PropertyId::new("p1")),
                CompareEvent::Cleared,
            ]
        );
    }
}
