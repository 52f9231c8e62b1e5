//! Application state shared by the handlers

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainError, KeyValueStore, PreservationEntry, SavedItem};
use crate::infrastructure::services::PreservationService;

/// Application state; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub preservation_service: Arc<dyn PreservationServiceTrait>,
    /// Backing store, probed by the readiness check
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(
        preservation_service: Arc<dyn PreservationServiceTrait>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            preservation_service,
            store,
        }
    }
}

/// Operations the HTTP layer needs from the preservation service
#[async_trait]
pub trait PreservationServiceTrait: Send + Sync {
    async fn search_items(&self, query: &str) -> Result<Vec<PreservationEntry>, DomainError>;
    async fn save_item(&self, item_name: &str) -> Result<SavedItem, DomainError>;
    async fn remove_item(&self, item_id: &str) -> Result<bool, DomainError>;
    async fn get_saved_items(&self) -> Result<Vec<SavedItem>, DomainError>;
    async fn get_item_details(
        &self,
        item_name: &str,
    ) -> Result<Option<PreservationEntry>, DomainError>;
    async fn cache_size(&self) -> u64;
    async fn clear_cache(&self);
}

#[async_trait]
impl PreservationServiceTrait for PreservationService {
    async fn search_items(&self, query: &str) -> Result<Vec<PreservationEntry>, DomainError> {
        PreservationService::search_items(self, query).await
    }

    async fn save_item(&self, item_name: &str) -> Result<SavedItem, DomainError> {
        PreservationService::save_item(self, item_name).await
    }

    async fn remove_item(&self, item_id: &str) -> Result<bool, DomainError> {
        PreservationService::remove_item(self, item_id).await
    }

    async fn get_saved_items(&self) -> Result<Vec<SavedItem>, DomainError> {
        PreservationService::get_saved_items(self).await
    }

    async fn get_item_details(
        &self,
        item_name: &str,
    ) -> Result<Option<PreservationEntry>, DomainError> {
        PreservationService::get_item_details(self, item_name).await
    }

    async fn cache_size(&self) -> u64 {
        PreservationService::cache_size(self).await
    }

    async fn clear_cache(&self) {
        PreservationService::clear_cache(self).await
    }
}
