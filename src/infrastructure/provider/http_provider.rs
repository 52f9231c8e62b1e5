use async_trait::async_trait;
use serde::Serialize;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, ItemName, PreservationProvider, ProviderResponse};

pub const DEFAULT_PROVIDER_BASE_URL: &str = "http://localhost:3000/api";

const PROVIDER_NAME: &str = "preservation-api";

/// Request body for the batched preservation lookup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreservationRequest<'a> {
    food_items: Vec<&'a str>,
}

/// Preservation provider backed by the HTTP preservation API
///
/// Sends `POST {base_url}/preservation` with `{"foodItems": [...]}` and expects
/// an object mapping item names to `{storageMethod, shelfLife, tips}`.
#[derive(Debug)]
pub struct HttpPreservationProvider<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> HttpPreservationProvider<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_PROVIDER_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    fn preservation_url(&self) -> String {
        format!("{}/preservation", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }

    fn build_request(&self, items: &[ItemName]) -> Result<serde_json::Value, DomainError> {
        let request = PreservationRequest {
            food_items: items.iter().map(ItemName::as_str).collect(),
        };

        serde_json::to_value(request)
            .map_err(|e| DomainError::internal(format!("Failed to encode request: {}", e)))
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<ProviderResponse, DomainError> {
        serde_json::from_value(json).map_err(|e| {
            DomainError::malformed_response(
                PROVIDER_NAME,
                format!("Expected a mapping of item name to preservation data: {}", e),
            )
        })
    }
}

#[async_trait]
impl<C: HttpClientTrait> PreservationProvider for HttpPreservationProvider<C> {
    async fn lookup(&self, items: &[ItemName]) -> Result<ProviderResponse, DomainError> {
        let url = self.preservation_url();
        let body = self.build_request(items)?;

        tracing::debug!(url = %url, items = items.len(), "Requesting preservation data");

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PreservationInfo;
    use crate::infrastructure::provider::http_client::HttpClient;
    use crate::infrastructure::provider::http_client::mock::MockHttpClient;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn items(names: &[&str]) -> Vec<ItemName> {
        names.iter().map(|n| ItemName::new(n).unwrap()).collect()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider =
            HttpPreservationProvider::with_base_url(MockHttpClient::new(), "http://api.local/api/");
        assert_eq!(provider.preservation_url(), "http://api.local/api/preservation");
    }

    #[test]
    fn test_default_base_url() {
        let provider = HttpPreservationProvider::new(MockHttpClient::new());
        assert_eq!(provider.preservation_url(), "http://localhost:3000/api/preservation");
    }

    #[test]
    fn test_build_request_uses_food_items() {
        let provider = HttpPreservationProvider::new(MockHttpClient::new());
        let body = provider.build_request(&items(&["kale", "apple"])).unwrap();

        assert_eq!(body, serde_json::json!({"foodItems": ["kale", "apple"]}));
    }

    #[tokio::test]
    async fn test_lookup_parses_mapping() {
        let client = MockHttpClient::new().with_response(
            "http://api.local/preservation",
            serde_json::json!({
                "banana": {
                    "storageMethod": "room temperature",
                    "shelfLife": "5 days",
                    "tips": ["keep away from other fruit"]
                }
            }),
        );
        let provider = HttpPreservationProvider::with_base_url(client, "http://api.local");

        let response = provider.lookup(&items(&["banana"])).await.unwrap();

        assert_eq!(
            response.get("banana"),
            Some(
                &PreservationInfo::new("room temperature", "5 days")
                    .with_tip("keep away from other fruit")
            )
        );
    }

    #[tokio::test]
    async fn test_lookup_accepts_multiple_keys() {
        let client = MockHttpClient::new().with_response(
            "http://api.local/preservation",
            serde_json::json!({
                "Apple": {"storageMethod": "fridge", "shelfLife": "4 weeks", "tips": []},
                "pear": {"storageMethod": "counter", "shelfLife": "1 week", "tips": []}
            }),
        );
        let provider = HttpPreservationProvider::with_base_url(client, "http://api.local");

        let response = provider.lookup(&items(&["apple"])).await.unwrap();

        assert_eq!(response.len(), 2);
        assert!(response.contains_key("Apple"));
        assert_eq!(
            provider.client.requests(),
            vec![(
                "http://api.local/preservation".to_string(),
                serde_json::json!({"foodItems": ["apple"]})
            )]
        );
    }

    #[tokio::test]
    async fn test_lookup_rejects_wrong_shape() {
        let client = MockHttpClient::new().with_response(
            "http://api.local/preservation",
            serde_json::json!(["not", "a", "map"]),
        );
        let provider = HttpPreservationProvider::with_base_url(client, "http://api.local");

        let err = provider.lookup(&items(&["kale"])).await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_lookup_rejects_missing_fields() {
        let client = MockHttpClient::new().with_response(
            "http://api.local/preservation",
            serde_json::json!({"kale": {"tips": ["wrap in towel"]}}),
        );
        let provider = HttpPreservationProvider::with_base_url(client, "http://api.local");

        let err = provider.lookup(&items(&["kale"])).await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_lookup_propagates_client_error() {
        let client = MockHttpClient::new().with_error(
            "http://api.local/preservation",
            DomainError::provider_unavailable("http", "connection refused"),
        );
        let provider = HttpPreservationProvider::with_base_url(client, "http://api.local");

        let err = provider.lookup(&items(&["kale"])).await.unwrap_err();
        assert!(matches!(err, DomainError::ProviderUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_lookup_against_http_server() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/preservation"))
            .and(body_json(serde_json::json!({"foodItems": ["kale"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kale": {
                    "storageMethod": "refrigerator crisper drawer",
                    "shelfLife": "1 week",
                    "tips": ["wrap in a damp paper towel"]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = HttpPreservationProvider::with_base_url(
            HttpClient::new(),
            format!("{}/api", server.uri()),
        );

        let response = provider.lookup(&items(&["kale"])).await.unwrap();
        assert_eq!(response["kale"].shelf_life, "1 week");
    }

    #[tokio::test]
    async fn test_lookup_http_error_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/preservation"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "Unknown food item"})),
            )
            .mount(&server)
            .await;

        let provider = HttpPreservationProvider::with_base_url(HttpClient::new(), server.uri());

        let err = provider.lookup(&items(&["rock"])).await.unwrap_err();
        assert!(err.to_string().contains("Unknown food item"));
    }
}
