//! Favorites: the persisted selection of properties.
//!
//! [`FavoritesStore`] keeps a unique-by-id collection of [`PropertyRef`]s,
//! writes it to a [`KeyValueStorage`] slot after every mutation and reads it
//! back on construction. Missing or corrupt snapshots load as an empty
//! collection; storage failures degrade the store to in-memory only.
//!
//! Several processes sharing one data directory race on the slot: the last
//! write wins. [`FavoritesStore::reload`] re-reads the slot on demand.
//!
//! [`PropertyRef`]: crate::property::PropertyRef
//! [`KeyValueStorage`]: crate::storage::KeyValueStorage

mod snapshot;
mod store;

pub use snapshot::{decode_snapshot, encode_snapshot, FAVORITES_KEY};
pub use store::{FavoritesEvent, FavoritesStore};
