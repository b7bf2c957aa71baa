//! Ingress filter
//!
//! Walks the multipart body, spools each image part to the backend temp area
//! and enforces the admission caps. Any cap violation aborts the whole
//! request; files already spooled are removed when their guards drop.

use axum::extract::Multipart;
use pixvault_core::constants::FILES_FIELD;
use pixvault_core::validation::{is_image, normalize_mime_type};
use pixvault_core::AppError;
use pixvault_storage::{SpoolError, TempArea, TempFile};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Admission caps applied while the body is still being read.
#[derive(Debug, Clone, Copy)]
pub struct IngressLimits {
    pub max_files: usize,
    pub max_file_size_bytes: usize,
}

/// One file part admitted by the ingress filter, spooled to disk.
#[derive(Debug)]
pub struct ReceivedFile {
    pub original_name: String,
    /// Declared media type, normalised
    pub mimetype: String,
    pub size: u64,
    pub temp: TempFile,
}

/// Read every part of `multipart`, returning the admitted files in receipt order.
///
/// Text parts are drained and ignored. A file part under any field other than
/// `images` is refused.
pub async fn receive_files(
    multipart: &mut Multipart,
    temp: &TempArea,
    limits: IngressLimits,
) -> Result<Vec<ReceivedFile>, AppError> {
    let mut files: Vec<ReceivedFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedMultipart(e.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        let Some(original_name) = field.file_name().map(str::to_string) else {
            tracing::debug!(field = %field_name, "Ignoring non-file form field");
            field
                .bytes()
                .await
                .map_err(|e| AppError::MalformedMultipart(e.to_string()))?;
            continue;
        };

        if field_name != FILES_FIELD {
            return Err(AppError::UnexpectedField(field_name));
        }

        if files.len() >= limits.max_files {
            return Err(AppError::TooManyFiles {
                max: limits.max_files,
            });
        }

        let mimetype = normalize_mime_type(field.content_type().unwrap_or(DEFAULT_CONTENT_TYPE));
        if !is_image(&mimetype) {
            return Err(AppError::NotAnImage {
                filename: original_name,
                content_type: mimetype,
            });
        }

        let spooled = temp
            .spool(field, Some(limits.max_file_size_bytes as u64))
            .await
            .map_err(|e| match e {
                SpoolError::TooLarge { .. } => AppError::FileTooLarge {
                    filename: original_name.clone(),
                    max_bytes: limits.max_file_size_bytes,
                },
                SpoolError::Source(msg) => AppError::MalformedMultipart(msg),
                SpoolError::Io(err) => AppError::Internal(format!("Failed to spool upload: {}", err)),
            })?;

        tracing::debug!(
            filename = %original_name,
            mimetype = %mimetype,
            size = spooled.size,
            "File part received"
        );

        files.push(ReceivedFile {
            original_name,
            mimetype,
            size: spooled.size,
            temp: spooled.file,
        });
    }

    if files.is_empty() {
        return Err(AppError::NoFiles);
    }

    Ok(files)
}
