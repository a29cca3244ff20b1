//! Snapshot Persistence
//!
//! Key-value storage seam used by the store. `BrowserStorage` talks to
//! `window.localStorage`; `MemoryStorage` backs tests and browsers where
//! local storage is disabled.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse snapshot: {0}")]
    Parse(#[source] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Access(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Synchronous string key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Returns the backend only if local storage can actually be reached
    pub fn probe() -> Result<Self, StorageError> {
        local_storage().map(|_| BrowserStorage)
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window.local_storage()?.ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(local_storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(local_storage()?.set_item(key, value)?)
    }
}

/// In-process storage that lives as long as the page
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|e| StorageError::Access(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Access(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and parse the snapshot under `key`. `Ok(None)` when nothing is stored.
pub fn load_snapshot<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map(Some).map_err(StorageError::Parse),
        None => Ok(None),
    }
}

/// Serialize `value` and write it under `key`
pub fn save_snapshot<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    storage.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn test_missing_key_loads_none() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<Task>> = load_snapshot(&storage, "todos").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let tasks = vec![Task::new(3, "walk dog"), Task::new(2, "buy milk")];

        save_snapshot(&storage, "todos", &tasks).unwrap();
        let loaded: Option<Vec<Task>> = load_snapshot(&storage, "todos").unwrap();
        assert_eq!(loaded, Some(tasks));
    }

    #[test]
    fn test_malformed_snapshot_is_parse_error() {
        let storage = MemoryStorage::with_entry("todos", "{not json");
        let result: Result<Option<Vec<Task>>, _> = load_snapshot(&storage, "todos");
        assert!(matches!(result, Err(StorageError::Parse(_))));
    }

    #[test]
    fn test_save_overwrites() {
        let storage = MemoryStorage::new();
        save_snapshot(&storage, "todos", &vec![Task::new(2, "a")]).unwrap();
        save_snapshot(&storage, "todos", &Vec::<Task>::new()).unwrap();
        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
    }
}
