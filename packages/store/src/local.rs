//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It is
//! a zero-size struct that looks up `window.localStorage` on every call; the
//! browser hands back the same `Storage` object each time, and holding a
//! `web_sys::Storage` would make the type `!Send`.
//!
//! Reads and removals swallow errors (a disabled store behaves like an empty
//! one). Writes report [`StorageError`] so callers can log them.

use crate::storage::{KeyValueStore, StorageError};

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
