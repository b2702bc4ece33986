//! The favorites store.

use chrono::Utc;
use std::fmt;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use super::snapshot::{decode_snapshot, encode_snapshot, FAVORITES_KEY};
use crate::notify::{SubscriptionId, Subscribers};
use crate::property::{PropertyId, PropertyRef};
use crate::storage::KeyValueStorage;

/// A change to the favorites collection.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesEvent {
    /// A property was favorited.
    Added(PropertyRef),
    /// A property was unfavorited.
    Removed(PropertyId),
    /// All favorites were removed.
    Cleared,
    /// The collection was replaced from storage.
    Reloaded,
}

/// Unique-by-id collection of favorited properties.
///
/// Every mutation writes the full collection to the `"favorites"` slot and
/// then notifies subscribers. Persistence is best-effort: a store without a
/// backend, or whose backend fails, keeps working in memory.
pub struct FavoritesStore {
    items: Vec<PropertyRef>,
    storage: Option<Arc<dyn KeyValueStorage>>,
    subscribers: Subscribers<FavoritesEvent>,
}

impl FavoritesStore {
    /// Open the store over a storage backend, loading the persisted snapshot.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_storage(Some(storage))
    }

    /// Create a store with no persistence.
    pub fn in_memory() -> Self {
        Self::with_storage(None)
    }

    /// Create a store over an optional backend.
    pub fn with_storage(storage: Option<Arc<dyn KeyValueStorage>>) -> Self {
        let items = storage
            .as_deref()
            .map(read_snapshot)
            .unwrap_or_default();

        tracing::debug!("Loaded {} favorites", items.len());

        Self {
            items,
            storage,
            subscribers: Subscribers::new(),
        }
    }

    /// Check whether this store writes to durable storage.
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Favorite or unfavorite a property.
    ///
    /// Returns `true` if the property is now favorited, `false` if it was
    /// removed. Matching is by id only. A blank id is never stored: the call
    /// returns `false` without writing or notifying.
    pub fn toggle(&mut self, mut property: PropertyRef) -> bool {
        if property.id.is_blank() {
            tracing::debug!("Ignoring favorite with a blank id");
            return false;
        }

        if let Some(pos) = self.position(property.id.as_str()) {
            let removed = self.items.remove(pos);
            self.persist();
            self.subscribers.notify(&FavoritesEvent::Removed(removed.id));
            false
        } else {
            if property.saved_at.is_none() {
                property.saved_at = Some(Utc::now());
            }
            self.items.push(property.clone());
            self.persist();
            self.subscribers.notify(&FavoritesEvent::Added(property));
            true
        }
    }

    /// Check whether a property is favorited.
    pub fn is_favorited(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Get a favorited property by id.
    pub fn get(&self, id: &str) -> Option<&PropertyRef> {
        self.position(id).map(|pos| &self.items[pos])
    }

    /// Read-only view of the favorites, in insertion order.
    pub fn list(&self) -> &[PropertyRef] {
        &self.items
    }

    /// Iterate over the favorited ids.
    pub fn ids(&self) -> impl Iterator<Item = &PropertyId> {
        self.items.iter().map(|item| &item.id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every favorite.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
        self.subscribers.notify(&FavoritesEvent::Cleared);
    }

    /// Replace in-memory state with the persisted snapshot.
    ///
    /// Picks up writes made by another process sharing the same storage.
    /// In-memory stores are left unchanged.
    pub fn reload(&mut self) {
        let Some(storage) = self.storage.as_deref() else {
            return;
        };
        self.items = read_snapshot(storage);
        self.subscribers.notify(&FavoritesEvent::Reloaded);
    }

    /// Register a callback for every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&FavoritesEvent) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Register a channel for every change.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<FavoritesEvent>) {
        self.subscribers.subscribe_channel()
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id.as_str() == id)
    }

    fn persist(&self) {
        let Some(storage) = self.storage.as_deref() else {
            return;
        };

        let json = match encode_snapshot(&self.items) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Could not serialize favorites: {}", e);
                return;
            }
        };

        if let Err(e) = storage.set(FAVORITES_KEY, &json) {
            tracing::warn!("Favorites not saved, keeping them in memory: {}", e);
        }
    }
}

fn read_snapshot(storage: &dyn KeyValueStorage) -> Vec<PropertyRef> {
    match storage.get(FAVORITES_KEY) {
        Ok(Some(raw)) => decode_snapshot(&raw),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!("Favorites could not be read, starting empty: {}", e);
            Vec::new()
        }
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("items", &self.items)
            .field("persistent", &self.storage.is_some())
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
