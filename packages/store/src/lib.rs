//! Client-side state for the club site: durable storage, the session, display
//! models, the static catalog and client configuration.

pub mod catalog;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::ClientConfig;
pub use models::{Cluster, Event, EventStatus, GroupRanking, Level, Member, Profile, StudentRanking};
pub use session::{Role, Session, SessionStore};
pub use storage::{KeyValueStore, SharedStorage, StorageError};

/// Storage backend for the current platform.
pub fn platform_storage() -> SharedStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        std::sync::Arc::new(LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        std::sync::Arc::new(MemoryStorage::new())
    }
}
