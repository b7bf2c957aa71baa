//! Stored filename generation and validation.

use chrono::{DateTime, Utc};
use std::path::Path;
use uuid::Uuid;

const MAX_EXTENSION_LEN: usize = 16;

/// Extension of the client filename including the leading dot, or an empty
/// string when there is none or it is not plain alphanumeric.
fn original_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| {
            !e.is_empty()
                && e.len() <= MAX_EXTENSION_LEN
                && e.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|e| format!(".{}", e))
        .unwrap_or_default()
}

/// Generate a storage filename: random token, timestamp, original extension.
///
/// The random token alone makes collisions practically impossible, so two
/// identically named files in the same request never share a stored name.
pub fn generate_filename(original_name: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}-{}{}",
        Uuid::new_v4(),
        now.timestamp_millis(),
        original_extension(original_name)
    )
}

/// Validate that `filename` names a file directly inside the storage root.
pub(crate) fn validate_filename(filename: &str) -> Result<(), String> {
    if filename.is_empty() {
        return Err("Filename is empty".to_string());
    }
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err("Filename contains invalid path characters".to_string());
    }
    if filename.starts_with('.') {
        return Err("Hidden filenames are not allowed".to_string());
    }
    Ok(())
}
