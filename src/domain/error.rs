use thiserror::Error;

/// Core domain errors
///
/// Every variant carries owned strings only, so errors can be cloned and
/// handed to every caller waiting on a shared provider lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider unavailable: {provider} - {message}")]
    ProviderUnavailable { provider: String, message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("Store read error: {message}")]
    StoreRead { message: String },

    #[error("Store write error: {message}")]
    StoreWrite { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider_unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn malformed_response(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn store_read(message: impl Into<String>) -> Self {
        Self::StoreRead {
            message: message.into(),
        }
    }

    pub fn store_write(message: impl Into<String>) -> Self {
        Self::StoreWrite {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for failures originating at the preservation provider
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable { .. } | Self::Provider { .. } | Self::MalformedResponse { .. }
        )
    }

    /// True for failures originating at the persistent store
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreRead { .. } | Self::StoreWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("No preservation data for 'kale'");
        assert_eq!(
            error.to_string(),
            "Not found: No preservation data for 'kale'"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let error = DomainError::provider("http", "HTTP 500: boom");
        assert_eq!(error.to_string(), "Provider error: http - HTTP 500: boom");
    }

    #[test]
    fn test_provider_failure_classification() {
        assert!(DomainError::provider_unavailable("http", "refused").is_provider_failure());
        assert!(DomainError::provider("http", "bad status").is_provider_failure());
        assert!(DomainError::malformed_response("http", "not a map").is_provider_failure());
        assert!(!DomainError::store_read("io").is_provider_failure());
    }

    #[test]
    fn test_store_failure_classification() {
        assert!(DomainError::store_read("io").is_store_failure());
        assert!(DomainError::store_write("io").is_store_failure());
        assert!(!DomainError::validation("empty").is_store_failure());
    }

    #[test]
    fn test_errors_are_cloneable() {
        let error = DomainError::provider("http", "timeout");
        assert_eq!(error.clone(), error);
    }
}
