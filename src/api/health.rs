//! Health check endpoints for liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;
use crate::domain::DomainError;
use crate::infrastructure::saved_item::SAVED_ITEMS_KEY;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Status of one dependency
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthCheck {
    fn from_result<T>(
        name: &str,
        started: Instant,
        result: Result<T, DomainError>,
        failed: HealthStatus,
    ) -> Self {
        let (status, message) = match result {
            Ok(_) => (HealthStatus::Healthy, None),
            Err(e) => (failed, Some(e.to_string())),
        };

        Self {
            name: name.to_string(),
            status,
            message,
            latency_ms: Some(started.elapsed().as_millis() as u64),
        }
    }
}

/// 200 while the process is up
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness: the store must answer a read
///
/// An unreadable store is unhealthy (503). A saved list that reads but does
/// not parse only degrades the service, since lookups still work.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let storage = check_storage(&state).await;
    let saved_items = check_saved_items(&state).await;

    let overall_status = if storage.status == HealthStatus::Unhealthy {
        HealthStatus::Unhealthy
    } else if saved_items.status != HealthStatus::Healthy {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![storage, saved_items]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_storage(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.store.read(SAVED_ITEMS_KEY).await;

    HealthCheck::from_result(state.store.backend_name(), start, result, HealthStatus::Unhealthy)
}

async fn check_saved_items(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.preservation_service.get_saved_items().await;

    HealthCheck::from_result("saved_items", start, result, HealthStatus::Degraded)
}
