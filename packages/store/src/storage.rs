//! # Durable client storage
//!
//! The [`KeyValueStore`] trait is the seam between session bookkeeping and
//! wherever the browser (or a test) keeps its persistent strings. It mirrors
//! the shape of `window.localStorage`: string keys, string values, synchronous
//! access.
//!
//! Implementations live in sibling modules: [`crate::MemoryStorage`] for native
//! builds and tests, and `LocalStorage` (wasm + `web` feature) for the browser.

use std::sync::Arc;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`] write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store is missing (no window, storage disabled by the user).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write, e.g. quota exceeded.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// A session was offered a role that cannot authenticate.
    #[error("cannot sign in with role `{0}`")]
    Role(String),
}

/// Synchronous string key/value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Shared handle used by the session store and the HTTP client.
pub type SharedStorage = Arc<dyn KeyValueStore>;

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
