use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::{KeyValueStore, StorageError};

/// In-memory KeyValueStore for testing and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.get("token").is_none());

        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("abc"));

        storage.set("token", "def").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("def"));
        assert_eq!(storage.len(), 1);

        storage.remove("token");
        assert!(storage.get("token").is_none());

        // Removing a missing key is a no-op
        storage.remove("token");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("role", "admin").unwrap();
        assert_eq!(other.get("role").as_deref(), Some("admin"));
    }

    #[test]
    fn test_arc_handle_forwards() {
        let storage: crate::SharedStorage = Arc::new(MemoryStorage::new());
        storage.set("userId", "42").unwrap();
        assert_eq!(storage.get("userId").as_deref(), Some("42"));
    }
}
