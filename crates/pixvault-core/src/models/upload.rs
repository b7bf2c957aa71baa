use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::StoredFile;

/// Separator between per-file rejection reasons in prose fields.
const REASON_DELIMITER: &str = "; ";

/// Terminal artifact of the upload pipeline.
///
/// `files` is present only when at least one file was accepted; `error` only
/// when none was. Rejected files are never listed, only summarised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<StoredFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    /// Build the aggregate response from the accepted files (in receipt
    /// order) and the `(original_name, reason)` pairs of the rejected ones.
    pub fn from_partition(accepted: Vec<StoredFile>, rejected: &[(String, String)]) -> Self {
        let reasons = rejected
            .iter()
            .map(|(name, reason)| format!("{}: {}", name, reason))
            .collect::<Vec<_>>()
            .join(REASON_DELIMITER);

        if accepted.is_empty() {
            return Self {
                success: false,
                message: "No valid files were uploaded".to_string(),
                files: None,
                error: Some(reasons),
            };
        }

        let mut message = format!("Successfully uploaded {} valid file(s)", accepted.len());
        if !rejected.is_empty() {
            message.push_str(&format!(
                " ({} file(s) rejected: {})",
                rejected.len(),
                reasons
            ));
        }

        Self {
            success: true,
            message,
            files: Some(accepted),
            error: None,
        }
    }

    /// HTTP status the backend answers with for this response.
    pub fn status_code(&self) -> u16 {
        if self.success {
            200
        } else {
            400
        }
    }
}
