//! HTTP error rendering
//!
//! Both binaries wrap `AppError` in their own `HttpAppError` and render it
//! here, so clients see one body shape everywhere. Whether a sensitive
//! detail reaches the client is decided by [`redact_sensitive_errors`]
//! from the configured environment, not at render time.
//!
//! [`redact_sensitive_errors`]: crate::middleware::redact_sensitive_errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pixvault_core::{AppError, ErrorMetadata, LogLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error body: `{success:false, message, error?}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
        }
    }
}

/// Response extension marking an error body whose detail must not leave a
/// production process.
#[derive(Debug, Clone)]
pub struct SensitiveDetail(pub ErrorResponse);

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Error occurred");
        }
    }
}

/// Log `error` at its own level and render it with full detail.
pub fn render_app_error(error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    log_error(error);

    let body = ErrorResponse::new(error.client_message(), error.detail());
    let sensitive = error.is_sensitive().then(|| SensitiveDetail(body.clone()));

    let mut response = (status, Json(body)).into_response();
    if let Some(marker) = sensitive {
        response.extensions_mut().insert(marker);
    }
    response
}
