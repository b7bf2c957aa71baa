//! Cleanup guarantor
//!
//! Owns the temp files of one request for the duration of the relay call.
//! [`CleanupGuard::around`] releases them after the call resolves, on the
//! success and the failure path alike. If the request future is dropped
//! mid-relay, the guard drops with it and each `TempFile` removes itself.

use pixvault_storage::TempFile;
use std::future::Future;

#[derive(Debug, Default)]
pub struct CleanupGuard {
    files: Vec<TempFile>,
}

impl CleanupGuard {
    pub fn new(files: Vec<TempFile>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Remove every file. Failures are logged, never returned.
    pub async fn release(self) {
        if self.is_empty() {
            return;
        }
        let count = self.len();
        for file in self.files {
            file.discard().await;
        }
        tracing::debug!(count, "Released temporary files");
    }

    /// Await `work`, then release the files regardless of its output.
    pub async fn around<F>(self, work: F) -> F::Output
    where
        F: Future,
    {
        let output = work.await;
        self.release().await;
        output
    }
}
