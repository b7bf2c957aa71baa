//! Storage abstraction trait
//!
//! This module defines the Storage trait that durable storage backends implement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::temp::TempFile;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Persist failed: {0}")]
    PersistFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid filename: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A temp file that has been moved into durable storage.
#[derive(Debug, Clone)]
pub struct PersistedFile {
    /// Generated storage filename
    pub filename: String,
    /// Absolute or root-relative on-disk location
    pub path: PathBuf,
}

/// A durable file as reported by a listing.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub filename: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

/// Durable storage for accepted uploads.
///
/// Implementations own the naming scheme: callers hand over a spooled temp
/// file and get back the generated filename.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Move a spooled temp file into storage under a freshly generated name
    /// derived from `original_name`'s extension.
    ///
    /// On success the temp file has been consumed. On failure it is removed
    /// when the guard drops.
    async fn persist(&self, temp: TempFile, original_name: &str) -> StorageResult<PersistedFile>;

    /// List every stored file.
    async fn list(&self) -> StorageResult<Vec<StoredObject>>;

    /// Delete a stored file by its generated filename.
    async fn delete(&self, filename: &str) -> StorageResult<()>;

    /// Check if a stored file exists.
    async fn exists(&self, filename: &str) -> StorageResult<bool>;

    /// Directory the stored files live in, for read-only static serving.
    fn root(&self) -> &Path;
}
