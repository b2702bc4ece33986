//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStorage;
use crate::error::{Result, RooflineError};

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn poisoned(key: &str) -> RooflineError {
        RooflineError::Storage {
            key: key.to_string(),
            message: "memory storage lock poisoned".to_string(),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().map_err(|_| Self::poisoned(key))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| Self::poisoned(key))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| Self::poisoned(key))?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("favorites").unwrap(), None);
    }

    #[test]
    fn set_replaces_value() {
        let storage = MemoryStorage::new();
        storage.set("favorites", "[]").unwrap();
        storage.set("favorites", r#"["p1"]"#).unwrap();
        assert_eq!(
            storage.get("favorites").unwrap().as_deref(),
            Some(r#"["p1"]"#)
        );
    }

    #[test]
    fn remove_deletes_and_tolerates_missing() {
        let storage = MemoryStorage::with_value("favorites", "[]");
        storage.remove("favorites").unwrap();
        assert_eq!(storage.get("favorites").unwrap(), None);
        storage.remove("favorites").unwrap();
    }

    #[test]
    fn keys_are_independent() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }
}
