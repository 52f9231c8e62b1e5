//! Request/response logging middleware

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Log every request and its outcome
///
/// `TraceLayer` already opens the request span, so this only emits events.
/// Server errors are logged at `warn`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = matched_path(&request);
    let request_id = request_id(&request);
    let headers = loggable_headers(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    response
}

/// Route template when matched, raw path otherwise
pub(crate) fn matched_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn loggable_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter(|(name, _)| should_log_header(name.as_str()))
        .map(|(name, value)| format!("{}={}", name, value.to_str().unwrap_or("[invalid]")))
        .collect::<Vec<_>>()
        .join(", ")
}

fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type" | "content-length" | "accept" | "user-agent" | "x-request-id"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_headers(headers: &[(&str, &str)]) -> Request<Body> {
        let mut builder = Request::builder().uri("/v1/preservation/search?q=kale");

        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_should_log_header() {
        assert!(should_log_header("content-type"));
        assert!(should_log_header("x-request-id"));
        assert!(!should_log_header("cookie"));
        assert!(!should_log_header("authorization"));
    }

    #[test]
    fn test_loggable_headers_skips_others() {
        let request = request_with_headers(&[("accept", "application/json"), ("cookie", "s=1")]);

        assert_eq!(loggable_headers(&request), "accept=application/json");
    }

    #[test]
    fn test_request_id_from_header() {
        let request = request_with_headers(&[("x-request-id", "abc-123")]);
        assert_eq!(request_id(&request), "abc-123");
    }

    #[test]
    fn test_request_id_generated_when_missing() {
        let request = request_with_headers(&[]);
        assert!(uuid::Uuid::parse_str(&request_id(&request)).is_ok());
    }

    #[test]
    fn test_matched_path_falls_back_to_uri() {
        let request = request_with_headers(&[]);
        assert_eq!(matched_path(&request), "/v1/preservation/search");
    }
}
