use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Descriptor of a file accepted and persisted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: Uuid,
    /// Filename as declared by the client
    pub original_name: String,
    /// Generated storage filename (`{uuid}-{millis}{.ext}`)
    pub filename: String,
    /// On-disk location
    pub path: String,
    pub size: u64,
    pub mimetype: String,
    /// Externally reachable URL
    pub url: String,
}
