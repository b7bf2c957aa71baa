use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Extension,
};
use pixvault_infra::RequestId;

use crate::capture::capture;
use crate::error::HttpAppError;
use crate::state::AppState;

/// Relay upload handler
///
/// Captures the form into the edge temp area, relays it to the backend and
/// passes the backend's JSON through with status 200. The captured temp
/// files are removed once the relay call has finished.
///
/// # Errors
/// - `AppError::UnexpectedField` / `AppError::InvalidInput` - Form does not match the schema (400)
/// - `AppError::MalformedMultipart` - Body could not be parsed (500)
/// - `AppError::Relay` - Backend unreachable, timed out or answered non-2xx (500)
#[tracing::instrument(
    skip(state, request_id, multipart),
    fields(request_id = %request_id.as_str(), operation = "relay_upload")
)]
pub async fn relay_upload(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let captured = capture(multipart, &state.temp, &state.schema).await?;
    let (payload, guard) = captured.into_relay();
    tracing::debug!(
        fields = payload.fields.len(),
        files = guard.len(),
        "Form captured"
    );
    let body = guard
        .around(state.relay.send(payload, Some(request_id.as_str())))
        .await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
