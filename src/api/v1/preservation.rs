//! Preservation endpoint handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CacheStatsResponse, Json, RemoveItemResponse, SaveItemRequest, SavedItemsResponse,
    SearchParams, SearchResponse,
};
use crate::domain::{PreservationEntry, SavedItem};

/// GET /v1/preservation/search?q=
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params
        .q
        .ok_or_else(|| ApiError::bad_request("Query parameter 'q' is required").with_param("q"))?;

    debug!(query = %query, "Searching preservation data");

    let entries = state.preservation_service.search_items(&query).await?;

    Ok(Json(SearchResponse::new(entries)))
}

/// GET /v1/preservation/items/{name}
pub async fn get_item_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PreservationEntry>, ApiError> {
    debug!(name = %name, "Getting item details");

    let entry = state
        .preservation_service
        .get_item_details(&name)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No preservation data for '{}'", name)))?;

    Ok(Json(entry))
}

/// GET /v1/preservation/saved
pub async fn list_saved_items(
    State(state): State<AppState>,
) -> Result<Json<SavedItemsResponse>, ApiError> {
    let items = state.preservation_service.get_saved_items().await?;

    Ok(Json(SavedItemsResponse::new(items)))
}

/// POST /v1/preservation/saved
pub async fn save_item(
    State(state): State<AppState>,
    Json(request): Json<SaveItemRequest>,
) -> Result<(StatusCode, Json<SavedItem>), ApiError> {
    let saved = state.preservation_service.save_item(&request.name).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /v1/preservation/saved/{id}
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveItemResponse>, ApiError> {
    let removed = state.preservation_service.remove_item(&id).await?;

    Ok(Json(RemoveItemResponse { removed }))
}

/// GET /v1/preservation/cache
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        entries: state.preservation_service.cache_size().await,
    })
}

/// DELETE /v1/preservation/cache
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.preservation_service.clear_cache().await;
    StatusCode::NO_CONTENT
}
