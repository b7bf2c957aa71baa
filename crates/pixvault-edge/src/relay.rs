//! Relay assembler
//!
//! Rebuilds the captured form as a fresh multipart body, streaming file
//! content from the temp area, and posts it to the backend upload endpoint.

use bytes::Bytes;
use pixvault_core::constants::{REQUEST_ID_HEADER, UPLOAD_PATH};
use pixvault_core::AppError;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio_util::io::ReaderStream;

/// Relay errors
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to open captured file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content type {content_type} for {file_name}")]
    ContentType {
        file_name: String,
        content_type: String,
    },

    #[error("Backend request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Backend request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Backend responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend response is not valid JSON: {0}")]
    InvalidResponse(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        AppError::Relay(err.to_string())
    }
}

/// One file to re-append, read back from its temp location.
#[derive(Debug, Clone)]
pub struct FilePartSpec {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
    pub path: PathBuf,
}

/// The rebuilt form: text values first, then files, each in receipt order.
#[derive(Debug, Clone, Default)]
pub struct RelayPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePartSpec>,
}

impl RelayPayload {
    /// Assemble the outbound multipart form. Files are streamed, not buffered.
    pub async fn into_form(self) -> Result<Form, RelayError> {
        let mut form = Form::new();

        for (name, value) in self.fields {
            form = form.text(name, value);
        }

        for spec in self.files {
            let file = tokio::fs::File::open(&spec.path)
                .await
                .map_err(|source| RelayError::Open {
                    path: spec.path.clone(),
                    source,
                })?;
            let body = Body::wrap_stream(ReaderStream::new(file));

            let part = Part::stream_with_length(body, spec.size)
                .file_name(spec.file_name.clone())
                .mime_str(&spec.content_type)
                .map_err(|_| RelayError::ContentType {
                    file_name: spec.file_name,
                    content_type: spec.content_type,
                })?;

            form = form.part(spec.field_name, part);
        }

        Ok(form)
    }
}

/// HTTP client for the backend upload endpoint.
#[derive(Clone, Debug)]
pub struct RelayClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RelayClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// Post `payload` to the backend and return its JSON body untouched.
    ///
    /// Any non-2xx status is an error; the body is kept for the log.
    pub async fn send(
        &self,
        payload: RelayPayload,
        request_id: Option<&str>,
    ) -> Result<Bytes, RelayError> {
        let file_count = payload.files.len();
        let form = payload.into_form().await?;
        let url = self.upload_url();
        let start = std::time::Instant::now();

        let mut request = self.client.post(&url).multipart(form);
        if let Some(id) = request_id {
            request = request.header(REQUEST_ID_HEADER, id);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "Backend rejected relayed upload"
            );
            return Err(RelayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| RelayError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            url = %url,
            files = file_count,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Relay to backend successful"
        );

        Ok(body)
    }

    fn classify(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout(self.timeout)
        } else {
            RelayError::Request(err)
        }
    }
}
