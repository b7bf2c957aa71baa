//! HTTP error response conversion
//!
//! Same body shape as the backend, so a browser sees one error format
//! whether the failure happened at the edge or behind it.

use axum::response::{IntoResponse, Response};
use pixvault_core::AppError;
use pixvault_infra::render_app_error;

use crate::relay::RelayError;

/// Wrapper type for AppError to implement IntoResponse
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<RelayError> for HttpAppError {
    fn from(err: RelayError) -> Self {
        HttpAppError(err.into())
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        render_app_error(&self.0)
    }
}
