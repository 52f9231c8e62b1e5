//! Preservation provider infrastructure - HTTP-backed knowledge source

pub mod http_client;
mod http_provider;

pub use http_client::{HttpClient, HttpClientTrait};
pub use http_provider::{DEFAULT_PROVIDER_BASE_URL, HttpPreservationProvider};
