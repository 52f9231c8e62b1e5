//! API request, response and error types

pub mod error;
pub mod json;
pub mod preservation;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use preservation::{
    CacheStatsResponse, ListResponse, RemoveItemResponse, SaveItemRequest, SavedItemsResponse,
    SearchParams, SearchResponse,
};
