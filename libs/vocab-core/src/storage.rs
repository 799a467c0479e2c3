//! Storage port for persisted trainer state.
//!
//! The engine never touches a concrete store; callers pass a
//! [`KeyValueStore`] explicitly. Values are opaque strings (JSON documents for
//! the word list and progress, plain text for the username).

use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Last username entered at the login gate.
pub const USERNAME_KEY: &str = "username";
/// Uploaded word list, overrides the default source when present.
pub const WORDS_KEY: &str = "words";
/// Per-user, per-word progress counters.
pub const PROGRESS_KEY: &str = "progress";

/// String-keyed blob store with get/set/remove semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store, used for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.values
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
