//! Blob persistence for whole collections
//!
//! Each collection lives under its own key as one JSON array. Reads that fail
//! or return garbage fall back to an empty collection; writes are
//! best-effort.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Storage backend could not be reached (no window, storage disabled, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Backend refused the read or write (quota, security, ...)
    #[error("storage operation failed for '{key}': {message}")]
    Backend { key: String, message: String },

    #[error("invalid collection payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value store of serialized collections
pub trait BlobStore {
    /// Previously saved value, or `None` if the key was never written
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-memory blob store for tests and native hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with data from an earlier session
    pub fn with_blob(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.blobs.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`
///
/// Holds no handle; the storage object is looked up on every call so the
/// store can live in a global.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBlobStore;

impl LocalStorageBlobStore {
    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        let window = web_sys::window()
            .ok_or_else(|| PersistenceError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistenceError::Unavailable("localStorage disabled".to_string()))
    }
}

impl BlobStore for LocalStorageBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PersistenceError::Backend {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PersistenceError::Backend {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

/// Load a collection; absent, unreadable or corrupt blobs give an empty list
pub fn load_collection<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: BlobStore + ?Sized,
{
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("persistence: failed to read '{}': {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            log::debug!("persistence: loaded {} items from '{}'", items.len(), key);
            items
        }
        Err(e) => {
            log::warn!("persistence: failed to parse '{}', starting empty: {}", key, e);
            Vec::new()
        }
    }
}

/// Save a whole collection; failures are logged and swallowed
pub fn save_collection<T, S>(store: &mut S, key: &str, items: &[T])
where
    T: Serialize,
    S: BlobStore + ?Sized,
{
    let result = serde_json::to_string(items)
        .map_err(PersistenceError::from)
        .and_then(|json| store.save(key, &json));

    if let Err(e) = result {
        log::error!("persistence: failed to save '{}': {}", key, e);
    }
}
