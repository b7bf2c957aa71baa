use crate::keys::{generate_filename, validate_filename};
use crate::temp::TempFile;
use crate::traits::{PersistedFile, Storage, StorageError, StorageResult, StoredObject};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for stored uploads (e.g., "./uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert a stored filename to its filesystem path with security validation
    fn key_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        validate_filename(filename).map_err(StorageError::InvalidKey)?;
        Ok(self.base_path.join(filename))
    }

    /// Move the spooled file to `to`, falling back to copy when a rename is
    /// impossible (e.g. the spool dir is on another filesystem).
    ///
    /// The guard is consumed either way: disarmed after a rename, discarded
    /// after a copy, dropped (and so removed) on failure.
    async fn move_temp(temp: TempFile, to: &Path) -> std::io::Result<()> {
        match fs::rename(temp.path(), to).await {
            Ok(()) => {
                temp.disarm();
                Ok(())
            }
            Err(rename_err) => {
                tracing::debug!(
                    error = %rename_err,
                    from = %temp.path().display(),
                    to = %to.display(),
                    "Rename failed, falling back to copy"
                );
                Self::copy_temp(temp, to).await
            }
        }
    }

    async fn copy_temp(temp: TempFile, to: &Path) -> std::io::Result<()> {
        fs::copy(temp.path(), to).await?;
        temp.discard().await;
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn persist(&self, temp: TempFile, original_name: &str) -> StorageResult<PersistedFile> {
        let filename = generate_filename(original_name, Utc::now());
        let path = self.key_to_path(&filename)?;
        let start = std::time::Instant::now();

        let source = temp.path().to_path_buf();

        if let Err(e) = Self::move_temp(temp, &path).await {
            // Partial copies must not stay visible in the storage root
            if let Err(cleanup_err) = fs::remove_file(&path).await {
                if cleanup_err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        error = %cleanup_err,
                        path = %path.display(),
                        "Failed to remove partial file"
                    );
                }
            }
            return Err(StorageError::PersistFailed(format!(
                "Failed to move {} to {}: {}",
                source.display(),
                path.display(),
                e
            )));
        }

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage persist successful"
        );

        Ok(PersistedFile { filename, path })
    }

    async fn list(&self) -> StorageResult<Vec<StoredObject>> {
        let mut entries = fs::read_dir(&self.base_path).await?;
        let mut objects = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let Some(filename) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            if validate_filename(&filename).is_err() {
                continue;
            }
            let modified = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            objects.push(StoredObject {
                filename,
                size: metadata.len(),
                modified,
            });
        }

        Ok(objects)
    }

    async fn delete(&self, filename: &str) -> StorageResult<()> {
        let path = self.key_to_path(filename)?;

        if !self.exists(filename).await? {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), filename = %filename, "Local storage delete successful");

        Ok(())
    }

    async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.key_to_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}
