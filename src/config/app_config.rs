use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::cache::InMemoryCacheConfig;
use crate::infrastructure::observability::MetricsConfig;
use crate::infrastructure::provider::DEFAULT_PROVIDER_BASE_URL;
use crate::infrastructure::storage::{StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

/// Preservation provider connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Per-request timeout; unset means the caller decides
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Lookup cache sizing
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub max_capacity: u64,
    #[serde(default)]
    pub ttl_secs: Option<u64>,
    /// Evict entries not read for this long
    #[serde(default)]
    pub tti_secs: Option<u64>,
}

/// Persistent store selection
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(rename = "type")]
    pub storage_type: String,
    pub path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            ttl_secs: None,
            tti_secs: None,
        }
    }
}

impl CacheSettings {
    pub fn to_cache_config(&self) -> InMemoryCacheConfig {
        let mut config = InMemoryCacheConfig::default().with_max_capacity(self.max_capacity);

        if let Some(ttl) = self.ttl_secs {
            config = config.with_time_to_live(Duration::from_secs(ttl));
        }

        if let Some(tti) = self.tti_secs {
            config = config.with_time_to_idle(Duration::from_secs(tti));
        }

        config
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            storage_type: "file".to_string(),
            path: PathBuf::from("data"),
        }
    }
}

impl StorageSettings {
    pub fn to_storage_config(&self) -> Result<StorageConfig, DomainError> {
        match self.storage_type.parse::<StorageType>()? {
            StorageType::InMemory => Ok(StorageConfig::in_memory()),
            StorageType::File => Ok(StorageConfig::file(self.path.clone())),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
