//! File-backed key-value store implementation

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{DomainError, KeyValueStore};

/// Key-value store that keeps one file per key under a directory
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so readers only ever see a complete value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(DomainError::validation(format!(
                "Invalid storage key '{}'",
                key
            )));
        }

        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::store_read(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            DomainError::store_write(format!(
                "Failed to create {}: {}",
                self.root.display(),
                e
            ))
        })?;

        tokio::fs::write(&tmp_path, value).await.map_err(|e| {
            DomainError::store_write(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;

        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            DomainError::store_write(format!("Failed to replace {}: {}", path.display(), e))
        })
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::store_write(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
