//! Scoped temporary files
//!
//! A `TempArea` is a per-process spool directory. Every file it hands out is
//! owned by a `TempFile` guard: `discard` removes it explicitly, `Drop`
//! removes it if nobody did, and persisting into durable storage disarms it.
//! Either way the file is removed at most once and never leaks past the guard.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

const TEMP_SUFFIX: &str = "part";

/// Spooling errors
#[derive(Debug, Error)]
pub enum SpoolError {
    #[error("IO error while spooling: {0}")]
    Io(#[from] io::Error),

    #[error("Part exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("Failed to read part: {0}")]
    Source(String),
}

/// Guard owning one temporary file on disk.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
    armed: bool,
}

impl TempFile {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now. Consumes the guard, so a file cannot be removed twice.
    pub async fn remove(mut self) -> io::Result<()> {
        self.armed = false;
        fs::remove_file(&self.path).await
    }

    /// Remove the file now, logging instead of returning a failure.
    pub async fn discard(self) {
        let path = self.path.clone();
        if let Err(e) = self.remove().await {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Failed to remove temporary file"
                );
            }
        }
    }

    /// Give up ownership without removing; the caller has moved the file away.
    pub(crate) fn disarm(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        // Only reached on error or cancellation paths; the blocking call is brief.
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Removed temporary file on drop");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Failed to remove temporary file on drop"
                );
            }
        }
    }
}

/// A part that has been fully written to the spool directory.
#[derive(Debug)]
pub struct SpooledFile {
    pub file: TempFile,
    pub size: u64,
}

/// Per-process spool directory for request parts.
#[derive(Debug, Clone)]
pub struct TempArea {
    dir: PathBuf,
}

impl TempArea {
    /// Create the spool directory if needed.
    pub async fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create a new, uniquely named empty file owned by a guard.
    pub async fn create(&self) -> io::Result<(TempFile, fs::File)> {
        let path = self
            .dir
            .join(format!("{}.{}", Uuid::new_v4(), TEMP_SUFFIX));
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        Ok((TempFile::new(path), file))
    }

    /// Write a byte stream to a new temp file.
    ///
    /// With `limit`, the write aborts as soon as the running size exceeds it.
    /// On any failure the partial file is removed before returning.
    pub async fn spool<S, E>(&self, stream: S, limit: Option<u64>) -> Result<SpooledFile, SpoolError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        let mut stream = std::pin::pin!(stream);
        let (temp, mut file) = self.create().await?;
        let mut size: u64 = 0;

        let result: Result<(), SpoolError> = async {
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| SpoolError::Source(e.to_string()))?;
                size += chunk.len() as u64;
                if let Some(limit) = limit {
                    if size > limit {
                        return Err(SpoolError::TooLarge { limit });
                    }
                }
                file.write_all(&chunk).await?;
            }
            file.flush().await?;
            Ok(())
        }
        .await;
        drop(file);

        match result {
            Ok(()) => Ok(SpooledFile { file: temp, size }),
            Err(e) => {
                temp.discard().await;
                Err(e)
            }
        }
    }
}
