//! Preservation Tips
//!
//! Food storage guidance served from an external knowledge provider, with:
//! - A bounded lookup cache keyed by normalized item name
//! - Coalesced provider requests for concurrent identical searches
//! - A persisted list of saved items (in-memory or file-backed)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::KeyValueStore;
use infrastructure::{
    cache::InMemoryLookupCache,
    provider::{HttpClient, HttpPreservationProvider},
    saved_item::StorageSavedItemRepository,
    services::PreservationService,
    storage::StorageFactory,
};
use tracing::info;

/// Wire the service from configuration
///
/// Returns the store as well so the readiness probe can reach it directly.
pub fn create_preservation_service(
    config: &AppConfig,
) -> anyhow::Result<(Arc<PreservationService>, Arc<dyn KeyValueStore>)> {
    let client = match config.provider.timeout() {
        Some(timeout) => HttpClient::with_timeout(timeout)?,
        None => HttpClient::new(),
    };
    let provider = HttpPreservationProvider::with_base_url(client, &config.provider.base_url);

    let storage_config = config.storage.to_storage_config()?;
    let store = StorageFactory::create(&storage_config);
    info!(
        backend = store.backend_name(),
        provider = %config.provider.base_url,
        cache_capacity = config.cache.max_capacity,
        "Preservation service configured"
    );

    let cache = InMemoryLookupCache::with_config(config.cache.to_cache_config());
    let saved_items = StorageSavedItemRepository::new(store.clone());

    let service = PreservationService::new(
        Arc::new(provider),
        Arc::new(cache),
        Arc::new(saved_items),
    );

    Ok((Arc::new(service), store))
}

/// Create the HTTP application state
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let (service, store) = create_preservation_service(config)?;

    Ok(AppState::new(service, store))
}
