//! Versioned JSON API

pub mod preservation;

use axum::{
    Router,
    routing::{delete, get},
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/preservation/search", get(preservation::search_items))
        .route(
            "/preservation/items/{name}",
            get(preservation::get_item_details),
        )
        .route(
            "/preservation/saved",
            get(preservation::list_saved_items).post(preservation::save_item),
        )
        .route("/preservation/saved/{id}", delete(preservation::remove_item))
        .route(
            "/preservation/cache",
            get(preservation::cache_stats).delete(preservation::clear_cache),
        )
}
