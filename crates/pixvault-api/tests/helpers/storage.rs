//! Storage doubles.

use async_trait::async_trait;
use pixvault_storage::{
    PersistedFile, Storage, StorageError, StorageResult, StoredObject, TempFile,
};
use std::path::{Path, PathBuf};

/// Storage that refuses every write.
pub struct FailingStorage {
    root: PathBuf,
}

impl FailingStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Storage for FailingStorage {
    async fn persist(&self, temp: TempFile, _original_name: &str) -> StorageResult<PersistedFile> {
        drop(temp);
        Err(StorageError::PersistFailed("disk full".to_string()))
    }

    async fn list(&self) -> StorageResult<Vec<StoredObject>> {
        Err(StorageError::IoError(std::io::Error::other("unavailable")))
    }

    async fn delete(&self, filename: &str) -> StorageResult<()> {
        Err(StorageError::NotFound(filename.to_string()))
    }

    async fn exists(&self, _filename: &str) -> StorageResult<bool> {
        Ok(false)
    }

    fn root(&self) -> &Path {
        &self.root
    }
}
