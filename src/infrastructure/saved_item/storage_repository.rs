//! Storage-backed saved item repository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DomainError, KeyValueStore, SavedItem, SavedItemRepository};
use crate::infrastructure::observability::record_saved_item_write;

/// Fixed key holding the whole saved list as one JSON array
pub const SAVED_ITEMS_KEY: &str = "savedPreservationItems";

/// Saved item repository over a key-value store
///
/// The list lives as a single serialized array under [`SAVED_ITEMS_KEY`].
/// Read-modify-write cycles are serialized through `write_lock`, so concurrent
/// appends and removals in this process never overwrite each other.
#[derive(Debug)]
pub struct StorageSavedItemRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StorageSavedItemRepository {
    /// Create a new storage-backed repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<SavedItem>, DomainError> {
        match self.store.read(SAVED_ITEMS_KEY).await? {
            Some(payload) => serde_json::from_str(&payload).map_err(|e| {
                DomainError::store_read(format!("Corrupt saved items payload: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, items: &[SavedItem]) -> Result<(), DomainError> {
        let payload = serde_json::to_string(items).map_err(|e| {
            DomainError::store_write(format!("Failed to serialize saved items: {}", e))
        })?;

        self.store.write(SAVED_ITEMS_KEY, &payload).await
    }
}

#[async_trait]
impl SavedItemRepository for StorageSavedItemRepository {
    async fn list(&self) -> Result<Vec<SavedItem>, DomainError> {
        self.load().await
    }

    async fn append(&self, item: SavedItem) -> Result<SavedItem, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        items.push(item.clone());
        self.persist(&items).await?;

        record_saved_item_write("append");
        Ok(item)
    }

    async fn remove(&self, id: &str) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        let before = items.len();
        items.retain(|item| item.id != id);
        self.persist(&items).await?;

        record_saved_item_write("remove");
        Ok(before - items.len())
    }
}
