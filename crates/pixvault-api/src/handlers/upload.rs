use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use pixvault_core::UploadResponse;
use pixvault_infra::{ErrorResponse, RequestId};

use crate::error::HttpAppError;
use crate::services::public_base_url;
use crate::services::upload::UploadService;
use crate::state::AppState;

/// Upload images handler
///
/// Admits up to `MAX_FILES` parts from the `images` field, validates each
/// file's signature against its declared type and persists the ones that
/// pass.
///
/// # Returns
/// `UploadResponse` with the accepted files (HTTP 200), or with every
/// rejection reason when none was accepted (HTTP 400)
///
/// # Errors
/// - `AppError::NoFiles` - No file part in the body
/// - `AppError::TooManyFiles` - Count cap exceeded
/// - `AppError::FileTooLarge` - A part exceeds the size cap
/// - `AppError::NotAnImage` - A part declares a non-image type
/// - `AppError::MalformedMultipart` - Body could not be parsed
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "At least one file accepted", body = UploadResponse),
        (status = 400, description = "No file accepted, or admission rejected", body = UploadResponse),
        (status = 500, description = "Malformed body or internal error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request_id, headers, multipart),
    fields(request_id = %request_id.as_str(), operation = "upload_images")
)]
pub async fn upload_images(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let public_base = public_base_url(&headers, state.config.base.server_port);

    let response = UploadService::new(&state)
        .upload(&mut multipart, &public_base)
        .await?;

    let status = StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::OK);
    Ok((status, Json(response)).into_response())
}
