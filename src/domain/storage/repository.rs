//! Key-value store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Durable string key-value storage
///
/// Values are opaque serialized payloads; callers own the encoding.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync + Debug {
    /// Reads the value stored under a key
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes a value, replacing whatever was stored under the key
    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Deletes a key, returns true if it existed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Backend name for logs and health checks
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_read_absent() {
        let mut mock = MockKeyValueStore::new();

        mock.expect_read().returning(|_| Ok(None));

        assert_eq!(mock.read("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_mock_store_write_error() {
        let mut mock = MockKeyValueStore::new();

        mock.expect_write()
            .returning(|_, _| Err(DomainError::store_write("disk full")));

        let result = mock.write("key", "[]").await;
        assert!(matches!(result, Err(DomainError::StoreWrite { .. })));
    }
}
