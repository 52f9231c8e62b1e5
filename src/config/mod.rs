//! Application configuration - defaults, config files and `APP__*` environment overrides

mod app_config;

pub use self::app_config::{
    AppConfig, CacheSettings, LogFormat, LoggingConfig, ProviderConfig, ServerConfig,
    StorageSettings,
};
