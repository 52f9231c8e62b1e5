//! In-memory key-value store implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{DomainError, KeyValueStore};

/// Thread-safe in-memory key-value store
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();

        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.into(), value.into());
        }

        store
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::store_read(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::store_write(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::store_write(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(entries.remove(key).is_some())
    }

    fn backend_name(&self) -> &'static str {
        "in_memory"
    }
}
