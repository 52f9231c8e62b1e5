//! In-memory lookup cache using moka

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::{ItemName, LookupCache, PreservationInfo};

/// Configuration for the in-memory lookup cache
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries
    pub max_capacity: u64,
    /// Entries older than this are dropped; `None` keeps them until evicted
    pub time_to_live: Option<Duration>,
    /// Time to idle - entries not accessed for this duration are evicted
    pub time_to_idle: Option<Duration>,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_live: None,
            time_to_idle: None,
        }
    }
}

impl InMemoryCacheConfig {
    /// Sets the maximum capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the time-to-live duration
    pub fn with_time_to_live(mut self, ttl: Duration) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    /// Sets the time-to-idle duration
    pub fn with_time_to_idle(mut self, tti: Duration) -> Self {
        self.time_to_idle = Some(tti);
        self
    }
}

/// Bounded, thread-safe lookup cache
///
/// Once `max_capacity` is reached moka evicts the least valuable entries
/// (TinyLFU admission with LRU eviction).
#[derive(Debug, Clone)]
pub struct InMemoryLookupCache {
    cache: MokaCache<ItemName, PreservationInfo>,
    config: InMemoryCacheConfig,
}

impl InMemoryLookupCache {
    /// Creates a new cache with default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Creates a new cache with the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        let mut builder = MokaCache::builder().max_capacity(config.max_capacity);

        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        if let Some(tti) = config.time_to_idle {
            builder = builder.time_to_idle(tti);
        }

        Self {
            cache: builder.build(),
            config,
        }
    }

    pub fn config(&self) -> &InMemoryCacheConfig {
        &self.config
    }
}

impl Default for InMemoryLookupCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupCache for InMemoryLookupCache {
    async fn get(&self, key: &ItemName) -> Option<PreservationInfo> {
        self.cache.get(key).await
    }

    async fn put(&self, key: ItemName, info: PreservationInfo) {
        self.cache.insert(key, info).await;
    }

    async fn has(&self, key: &ItemName) -> bool {
        self.cache.contains_key(key)
    }

    async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> ItemName {
        ItemName::new(name).unwrap()
    }

    fn info(storage: &str) -> PreservationInfo {
        PreservationInfo::new(storage, "1 week")
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let cache = InMemoryLookupCache::new();

        cache.put(key("kale"), info("fridge")).await;

        assert_eq!(cache.get(&key("kale")).await, Some(info("fridge")));
        assert!(cache.has(&key("KALE")).await);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let cache = InMemoryLookupCache::new();

        assert!(cache.get(&key("missing")).await.is_none());
        assert!(!cache.has(&key("missing")).await);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = InMemoryLookupCache::new();

        cache.put(key("kale"), info("fridge")).await;
        cache.put(key("Kale"), info("freezer")).await;

        assert_eq!(cache.get(&key("kale")).await, Some(info("freezer")));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = InMemoryLookupCache::new();

        cache.put(key("kale"), info("fridge")).await;
        cache.put(key("apple"), info("counter")).await;

        assert!(!cache.is_empty().await);
        cache.clear().await;

        assert!(cache.is_empty().await);
        assert!(cache.get(&key("kale")).await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let cache =
            InMemoryLookupCache::with_config(InMemoryCacheConfig::default().with_max_capacity(5));

        for i in 0..50 {
            cache.put(key(&format!("item-{}", i)), info("pantry")).await;
        }

        assert!(cache.len().await <= 5);
    }

    #[tokio::test]
    async fn test_time_to_live_expiration() {
        let cache = InMemoryLookupCache::with_config(
            InMemoryCacheConfig::default().with_time_to_live(Duration::from_millis(50)),
        );

        cache.put(key("kale"), info("fridge")).await;
        assert!(cache.get(&key("kale")).await.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get(&key("kale")).await.is_none());
    }

    #[test]
    fn test_config() {
        let config = InMemoryCacheConfig::default()
            .with_max_capacity(100)
            .with_time_to_live(Duration::from_secs(300))
            .with_time_to_idle(Duration::from_secs(60));

        let cache = InMemoryLookupCache::with_config(config);

        assert_eq!(cache.config().max_capacity, 100);
        assert_eq!(cache.config().time_to_live, Some(Duration::from_secs(300)));
        assert_eq!(cache.config().time_to_idle, Some(Duration::from_secs(60)));
    }
}
