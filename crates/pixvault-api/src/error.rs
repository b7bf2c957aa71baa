//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`; every `AppError` that escapes a
//! handler is logged at its own level and rendered as `{success:false,
//! message, error?}`. Sensitive details are stripped later by the redaction
//! layer when the process is configured for production.

use axum::response::{IntoResponse, Response};
use pixvault_core::AppError;
use pixvault_infra::render_app_error;
use pixvault_storage::StorageError;

/// Wrapper type for AppError to implement IntoResponse
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(_) => AppError::NotFound("File not found".to_string()),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::PersistFailed(msg)
            | StorageError::DeleteFailed(msg)
            | StorageError::ConfigError(msg) => AppError::Storage(msg),
            StorageError::IoError(err) => AppError::Storage(format!("IO error: {}", err)),
        };
        HttpAppError(app)
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        render_app_error(&self.0)
    }
}
