//! Request and response bodies for the preservation endpoints

use serde::{Deserialize, Serialize};

use crate::domain::{PreservationEntry, SavedItem};

/// `GET /v1/preservation/search?q=...`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// List envelope: `{"data": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

pub type SearchResponse = ListResponse<PreservationEntry>;
pub type SavedItemsResponse = ListResponse<SavedItem>;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveItemRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveItemResponse {
    pub removed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    pub entries: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemName, PreservationInfo};

    #[test]
    fn test_search_response_format() {
        let kale = ItemName::new("kale").unwrap();
        let response = SearchResponse::new(vec![PreservationEntry::new(
            &kale,
            PreservationInfo::new("fridge", "1 week"),
        )]);

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"][0]["id"], "kale");
        assert_eq!(json["data"][0]["storageMethod"], "fridge");
        assert_eq!(json["data"][0]["tips"], serde_json::json!([]));
    }

    #[test]
    fn test_search_params_optional_query() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert!(params.q.is_none());
    }
}
