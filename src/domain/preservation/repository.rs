//! Saved item repository trait

use async_trait::async_trait;

use super::entity::SavedItem;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Persistence boundary for the user's saved items
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SavedItemRepository: Send + Sync {
    /// Lists every saved item in insertion order; empty if nothing was saved
    async fn list(&self) -> Result<Vec<SavedItem>, DomainError>;

    /// Appends an item to the persisted list
    async fn append(&self, item: SavedItem) -> Result<SavedItem, DomainError>;

    /// Removes every item with the given id, returns how many were dropped
    async fn remove(&self, id: &str) -> Result<usize, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_saved_item_repository() {
        let mut mock = MockSavedItemRepository::new();

        mock.expect_list().returning(|| Ok(vec![]));

        let result = mock.list().await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_saved_item_repository_remove() {
        let mut mock = MockSavedItemRepository::new();

        mock.expect_remove()
            .withf(|id| id == "missing")
            .returning(|_| Ok(0));

        assert_eq!(mock.remove("missing").await.unwrap(), 0);
    }
}
