//! Persistence partitioner
//!
//! Persists every accepted file under a generated name and folds the
//! outcome of the whole request into one `UploadResponse`.

use pixvault_core::{StoredFile, UploadResponse};
use pixvault_storage::Storage;
use uuid::Uuid;

use super::validator::CheckedFile;

const PERSIST_FAILED_REASON: &str = "Failed to store file";

/// Persist the accepted files in order and build the aggregate response.
///
/// `public_base` is the externally reachable static prefix, e.g.
/// `http://localhost:5000/uploads`. A file that passed validation but could
/// not be persisted is reported as rejected.
pub async fn partition(
    checked: Vec<CheckedFile>,
    storage: &dyn Storage,
    public_base: &str,
) -> UploadResponse {
    let mut accepted: Vec<StoredFile> = Vec::new();
    let mut rejected: Vec<(String, String)> = Vec::new();

    for outcome in checked {
        let file = match outcome {
            CheckedFile::Accepted(file) => file,
            CheckedFile::Rejected {
                original_name,
                reason,
            } => {
                rejected.push((original_name, reason));
                continue;
            }
        };

        match storage.persist(file.temp, &file.original_name).await {
            Ok(persisted) => {
                accepted.push(StoredFile {
                    id: Uuid::new_v4(),
                    url: format!("{}/{}", public_base, persisted.filename),
                    path: persisted.path.display().to_string(),
                    filename: persisted.filename,
                    original_name: file.original_name,
                    size: file.size,
                    mimetype: file.mimetype,
                });
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    filename = %file.original_name,
                    "Failed to persist accepted file"
                );
                rejected.push((file.original_name, PERSIST_FAILED_REASON.to_string()));
            }
        }
    }

    tracing::info!(
        accepted = accepted.len(),
        rejected = rejected.len(),
        "Upload partitioned"
    );

    UploadResponse::from_partition(accepted, &rejected)
}
