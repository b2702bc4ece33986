//! Durable key-value storage for client-side state.
//!
//! Stores persist whole values under fixed string keys. A backend replaces
//! the entire value on `set`, and a key that was never written reads as
//! `None`.
//!
//! - [`MemoryStorage`] keeps values in a mutex-guarded map
//! - [`FileStorage`] keeps one JSON file per key in a data directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A string-keyed slot store shared by the client-side stores.
///
/// Implementations take `&self` so one backend can be shared behind an
/// `Arc` by several stores.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Get the default data directory for persisted state.
pub fn default_data_dir() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("roofline")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_valid() {
        let path = default_data_dir();
        assert!(path.ends_with("roofline"));
    }
}
