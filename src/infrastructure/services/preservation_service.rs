//! Preservation service - cached lookups and the saved item list

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{debug, info, warn};

use crate::domain::{
    DomainError, ItemName, LookupCache, PreservationEntry, PreservationInfo, PreservationProvider,
    SavedItem, SavedItemRepository,
};
use crate::infrastructure::observability::{record_cache_lookup, record_provider_request};

type LookupResult = Result<Vec<PreservationEntry>, DomainError>;
type SharedLookup = Shared<BoxFuture<'static, LookupResult>>;
type InFlight = Arc<Mutex<HashMap<ItemName, SharedLookup>>>;

/// Public operation set over the lookup cache, the provider and the saved list
///
/// Concurrent searches for the same normalized name share one provider
/// request. Each provider request runs as its own task, so a caller that stops
/// waiting does not cancel the lookup or the cache fill that follows it.
pub struct PreservationService {
    provider: Arc<dyn PreservationProvider>,
    cache: Arc<dyn LookupCache>,
    saved_items: Arc<dyn SavedItemRepository>,
    in_flight: InFlight,
}

impl std::fmt::Debug for PreservationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreservationService")
            .field("provider", &self.provider.provider_name())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl PreservationService {
    pub fn new(
        provider: Arc<dyn PreservationProvider>,
        cache: Arc<dyn LookupCache>,
        saved_items: Arc<dyn SavedItemRepository>,
    ) -> Self {
        Self {
            provider,
            cache,
            saved_items,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Search preservation data for one item, cache first
    ///
    /// A cache miss sends the one-element batch `[query]` to the provider and
    /// caches every name in the answer. The result holds every returned entry,
    /// ordered by normalized name.
    pub async fn search_items(&self, query: &str) -> Result<Vec<PreservationEntry>, DomainError> {
        let key = ItemName::new(query)?;

        if let Some(info) = self.cache.get(&key).await {
            record_cache_lookup(true);
            debug!(item = %key, "Preservation cache hit");
            return Ok(vec![PreservationEntry::new(&key, info)]);
        }

        record_cache_lookup(false);
        debug!(item = %key, "Preservation cache miss");

        self.lookup(key).await
    }

    /// Save an item to the persisted list, looking it up first if needed
    pub async fn save_item(&self, item_name: &str) -> Result<SavedItem, DomainError> {
        let key = ItemName::new(item_name)?;

        let info = match self.cache.get(&key).await {
            Some(info) => info,
            None => self
                .search_items(item_name)
                .await?
                .into_iter()
                .find(|entry| entry.name == key.as_str())
                .map(|entry| entry.info)
                .ok_or_else(|| {
                    DomainError::not_found(format!("No preservation data for '{}'", key))
                })?,
        };

        let saved = self.saved_items.append(SavedItem::new(&key, info)).await?;

        info!(id = %saved.id, name = %saved.name, "Saved preservation item");
        Ok(saved)
    }

    /// Remove saved items by id
    ///
    /// Returns `true` once the list is written back, whether or not the id
    /// matched anything.
    pub async fn remove_item(&self, item_id: &str) -> Result<bool, DomainError> {
        let removed = self.saved_items.remove(item_id).await?;

        if removed == 0 {
            debug!(id = %item_id, "No saved item matched id");
        } else {
            info!(id = %item_id, removed, "Removed saved preservation item");
        }

        Ok(true)
    }

    /// List saved items; empty when nothing was ever saved
    pub async fn get_saved_items(&self) -> Result<Vec<SavedItem>, DomainError> {
        self.saved_items.list().await
    }

    /// Details for one item: cached entry, or the first search result
    pub async fn get_item_details(
        &self,
        item_name: &str,
    ) -> Result<Option<PreservationEntry>, DomainError> {
        let key = ItemName::new(item_name)?;

        if let Some(info) = self.cache.get(&key).await {
            record_cache_lookup(true);
            return Ok(Some(PreservationEntry::new(&key, info)));
        }

        Ok(self.search_items(item_name).await?.into_iter().next())
    }

    /// Approximate number of cached entries
    pub async fn cache_size(&self) -> u64 {
        self.cache.len().await
    }

    /// Drop every cached entry
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        info!("Preservation cache cleared");
    }

    /// Join the in-flight lookup for `key`, starting one if none is running
    async fn lookup(&self, key: ItemName) -> LookupResult {
        let lookup = {
            let mut in_flight = lock_in_flight(&self.in_flight);

            match in_flight.get(&key) {
                Some(existing) => {
                    debug!(item = %key, "Joining in-flight preservation lookup");
                    existing.clone()
                }
                None => {
                    let lookup = self.spawn_lookup(key.clone());
                    in_flight.insert(key, lookup.clone());
                    lookup
                }
            }
        };

        lookup.await
    }

    /// Start the provider request on its own task
    ///
    /// The in-flight entry is inserted before the caller releases the map lock
    /// and removed by the task once the cache is filled, so a later caller sees
    /// either the running lookup or the cached result. The removal also runs
    /// when the task panics.
    fn spawn_lookup(&self, key: ItemName) -> SharedLookup {
        let provider = self.provider.clone();
        let cache = self.cache.clone();
        let guard = InFlightGuard {
            in_flight: self.in_flight.clone(),
            key,
        };

        let handle = tokio::spawn(async move {
            let guard = guard;
            fetch_and_cache(provider.as_ref(), cache.as_ref(), &guard.key).await
        });

        async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => Err(DomainError::internal(format!(
                    "Preservation lookup task failed: {}",
                    e
                ))),
            }
        }
        .boxed()
        .shared()
    }
}

/// Lock the in-flight map, recovering it if a holder panicked
fn lock_in_flight(in_flight: &InFlight) -> MutexGuard<'_, HashMap<ItemName, SharedLookup>> {
    in_flight.lock().unwrap_or_else(|poisoned| {
        warn!("In-flight lookup map was poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Removes a key from the in-flight map when dropped, on completion or unwind
struct InFlightGuard {
    in_flight: InFlight,
    key: ItemName,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock_in_flight(&self.in_flight).remove(&self.key);
    }
}

/// One provider round trip; the cache is only touched once the whole answer is valid
async fn fetch_and_cache(
    provider: &dyn PreservationProvider,
    cache: &dyn LookupCache,
    key: &ItemName,
) -> LookupResult {
    let started = Instant::now();
    let result = provider.lookup(std::slice::from_ref(key)).await;
    record_provider_request(provider.provider_name(), result.is_ok(), started.elapsed());

    let response = result.inspect_err(|e| {
        warn!(item = %key, error = %e, "Preservation lookup failed");
    })?;

    let mut normalized: BTreeMap<ItemName, PreservationInfo> = BTreeMap::new();

    for (name, info) in response {
        let name = ItemName::new(&name).map_err(|_| {
            DomainError::malformed_response(
                provider.provider_name(),
                "Response contains a blank item name",
            )
        })?;
        normalized.insert(name, info);
    }

    let mut entries = Vec::with_capacity(normalized.len());

    for (name, info) in normalized {
        cache.put(name.clone(), info.clone()).await;
        entries.push(PreservationEntry::new(&name, info));
    }

    debug!(item = %key, returned = entries.len(), "Preservation lookup cached");
    Ok(entries)
}
