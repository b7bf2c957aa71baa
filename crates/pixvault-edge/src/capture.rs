//! Temp capture stage
//!
//! Parses the incoming multipart request against a [`FormSchema`]. Text
//! parts are kept in memory; file parts are spooled to the edge temp area
//! and owned by `TempFile` guards from then on.
//!
//! No per-file size or count cap is applied here: the backend owns those.
//! The router's request body limit is the only bound on what is spooled.

use axum::extract::Multipart;
use pixvault_core::constants::FILES_FIELD;
use pixvault_core::AppError;
use pixvault_storage::{SpoolError, TempArea, TempFile};
use std::collections::HashMap;

use crate::cleanup::CleanupGuard;
use crate::relay::{FilePartSpec, RelayPayload};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Whether a form field carries text or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    File,
}

/// How many values a form field may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Many,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
}

/// The set of fields the edge accepts and relays.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// A schema with no fields; add them with [`text`](Self::text) and
    /// [`files`](Self::files).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The upload form: one `images` file slot taking many files.
    pub fn upload_form() -> Self {
        Self::empty().files(FILES_FIELD, Cardinality::Many)
    }

    pub fn text(self, name: impl Into<String>, cardinality: Cardinality) -> Self {
        self.with(name.into(), FieldKind::Text, cardinality)
    }

    pub fn files(self, name: impl Into<String>, cardinality: Cardinality) -> Self {
        self.with(name.into(), FieldKind::File, cardinality)
    }

    fn with(mut self, name: String, kind: FieldKind, cardinality: Cardinality) -> Self {
        self.fields.retain(|f| f.name != name);
        self.fields.push(FieldSpec {
            name,
            kind,
            cardinality,
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check one incoming part against the schema. `seen` is how many
    /// values this field already had.
    pub fn admit(&self, name: &str, kind: FieldKind, seen: usize) -> Result<(), AppError> {
        let spec = self
            .get(name)
            .ok_or_else(|| AppError::UnexpectedField(name.to_string()))?;

        if spec.kind != kind {
            let expected = match spec.kind {
                FieldKind::Text => "a text value",
                FieldKind::File => "a file",
            };
            return Err(AppError::InvalidInput(format!(
                "Field {} expects {}",
                name, expected
            )));
        }

        if spec.cardinality == Cardinality::Single && seen > 0 {
            return Err(AppError::InvalidInput(format!(
                "Field {} accepts a single value",
                name
            )));
        }

        Ok(())
    }
}

/// One captured file part, spooled to the edge temp area.
#[derive(Debug)]
pub struct UploadedFilePart {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub temp: TempFile,
}

/// Everything parsed from one request, in receipt order.
#[derive(Debug, Default)]
pub struct CapturedForm {
    /// Text values; a repeated field appears once per value
    pub fields: Vec<(String, String)>,
    pub files: Vec<UploadedFilePart>,
}

impl CapturedForm {
    /// Split into the relay description and the guard owning the temp files.
    pub fn into_relay(self) -> (RelayPayload, CleanupGuard) {
        let mut specs = Vec::with_capacity(self.files.len());
        let mut temps = Vec::with_capacity(self.files.len());

        for part in self.files {
            specs.push(FilePartSpec {
                field_name: part.field_name,
                file_name: part.file_name,
                content_type: part.content_type,
                size: part.size,
                path: part.temp.path().to_path_buf(),
            });
            temps.push(part.temp);
        }

        (
            RelayPayload {
                fields: self.fields,
                files: specs,
            },
            CleanupGuard::new(temps),
        )
    }
}

fn spool_error(err: SpoolError) -> AppError {
    match err {
        SpoolError::Source(msg) => AppError::MalformedMultipart(msg),
        SpoolError::TooLarge { limit } => {
            AppError::MalformedMultipart(format!("Part exceeds {} bytes", limit))
        }
        SpoolError::Io(e) => AppError::Internal(format!("Failed to spool upload: {}", e)),
    }
}

/// Parse `multipart` against `schema`.
///
/// On any error every file spooled so far is removed before returning.
pub async fn capture(
    mut multipart: Multipart,
    temp: &TempArea,
    schema: &FormSchema,
) -> Result<CapturedForm, AppError> {
    let mut form = CapturedForm::default();
    let mut seen: HashMap<String, usize> = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedMultipart(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let kind = if file_name.is_some() {
            FieldKind::File
        } else {
            FieldKind::Text
        };

        let count = seen.entry(name.clone()).or_insert(0);
        schema.admit(&name, kind, *count)?;
        *count += 1;

        match file_name {
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::MalformedMultipart(e.to_string()))?;
                form.fields.push((name, value));
            }
            Some(file_name) => {
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let spooled = temp.spool(field, None).await.map_err(spool_error)?;

                tracing::debug!(
                    field = %name,
                    file_name = %file_name,
                    content_type = %content_type,
                    size = spooled.size,
                    "Captured file part"
                );

                form.files.push(UploadedFilePart {
                    field_name: name,
                    file_name,
                    content_type,
                    size: spooled.size,
                    temp: spooled.file,
                });
            }
        }
    }

    Ok(form)
}
