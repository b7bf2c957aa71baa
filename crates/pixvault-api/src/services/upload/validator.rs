//! Signature validator
//!
//! Reads the head of every received file and checks it against the declared
//! type. Rejected files are removed from the temp area straight away.

use pixvault_core::validation::{sniff, SIGNATURE_SNIFF_LEN};
use pixvault_core::ValidationVerdict;
use std::path::Path;
use tokio::io::AsyncReadExt;

use super::ingress::ReceivedFile;

const READ_ERROR_REASON: &str = "Validation error";

/// Outcome of validating one received file.
#[derive(Debug)]
pub enum CheckedFile {
    /// Still spooled, ready to persist
    Accepted(ReceivedFile),
    /// Temp file already removed
    Rejected { original_name: String, reason: String },
}

impl CheckedFile {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CheckedFile::Accepted(_))
    }
}

async fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut head = Vec::with_capacity(SIGNATURE_SNIFF_LEN);
    file.take(SIGNATURE_SNIFF_LEN as u64)
        .read_to_end(&mut head)
        .await?;
    Ok(head)
}

/// Inspect one file. Never fails: read errors become a rejection.
pub async fn inspect(file: &ReceivedFile) -> ValidationVerdict {
    match read_head(file.temp.path()).await {
        Ok(head) => sniff(&file.mimetype, &head),
        Err(e) => {
            tracing::warn!(
                error = %e,
                filename = %file.original_name,
                "Failed to read file for validation"
            );
            ValidationVerdict::rejected(READ_ERROR_REASON)
        }
    }
}

/// Produce exactly one outcome per file, in receipt order.
pub async fn validate_all(files: Vec<ReceivedFile>) -> Vec<CheckedFile> {
    let mut checked = Vec::with_capacity(files.len());

    for file in files {
        let verdict = inspect(&file).await;
        if verdict.is_accepted() {
            tracing::debug!(filename = %file.original_name, "File passed validation");
            checked.push(CheckedFile::Accepted(file));
            continue;
        }

        tracing::warn!(
            filename = %file.original_name,
            mimetype = %file.mimetype,
            reason = verdict.reason(),
            "File rejected by signature validation"
        );
        let ReceivedFile {
            original_name,
            temp,
            ..
        } = file;
        temp.discard().await;
        checked.push(CheckedFile::Rejected {
            original_name,
            reason: verdict.reason().to_string(),
        });
    }

    checked
}
