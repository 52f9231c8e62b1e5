//! Storage factory for runtime store selection

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{DomainError, KeyValueStore};

use super::file::FileStore;
use super::in_memory::InMemoryStore;

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// One JSON file per key under a directory
    File,
}

impl std::str::FromStr for StorageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "file" | "fs" | "filesystem" => Ok(Self::File),
            _ => Err(DomainError::configuration(format!(
                "Unknown storage type: {}. Valid types: in_memory, file",
                s
            ))),
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::InMemory => write!(f, "in_memory"),
            StorageType::File => write!(f, "file"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// File storage rooted at a directory
    File(PathBuf),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a file storage configuration
    pub fn file(root: impl Into<PathBuf>) -> Self {
        Self::File(root.into())
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::File(_) => StorageType::File,
        }
    }
}

/// Factory for creating key-value stores
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a store based on the configuration
    pub fn create(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
        match config {
            StorageConfig::InMemory => Arc::new(InMemoryStore::new()),
            StorageConfig::File(root) => {
                let store = FileStore::new(root.clone());
                tracing::info!(root = %store.root().display(), "Using file storage");
                Arc::new(store)
            }
        }
    }
}
