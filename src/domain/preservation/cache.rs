//! Lookup cache trait

use async_trait::async_trait;

use super::entity::{ItemName, PreservationInfo};

/// In-process cache of provider answers keyed by normalized item name
///
/// Lookups cannot fail; a backend that loses an entry simply reports a miss.
#[async_trait]
pub trait LookupCache: Send + Sync + std::fmt::Debug {
    /// Gets the cached metadata for a key
    async fn get(&self, key: &ItemName) -> Option<PreservationInfo>;

    /// Inserts or overwrites the metadata for a key
    async fn put(&self, key: ItemName, info: PreservationInfo);

    /// Checks if a key is cached
    async fn has(&self, key: &ItemName) -> bool {
        self.get(key).await.is_some()
    }

    /// Returns the approximate number of cached entries
    async fn len(&self) -> u64;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops every cached entry
    async fn clear(&self);
}
