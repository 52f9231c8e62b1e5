//! Observability infrastructure - Prometheus metrics

mod config;
mod metrics;

pub use self::config::MetricsConfig;
pub use self::metrics::{
    PrometheusMetrics, create_metrics_router, init_metrics, record_cache_lookup,
    record_http_request, record_provider_request, record_saved_item_write,
};
