use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use pixvault_core::{DeleteResponse, GalleryEntry, GalleryResponse};
use pixvault_infra::ErrorResponse;

use crate::error::HttpAppError;
use crate::services::public_base_url;
use crate::state::AppState;

/// List stored images, newest first
#[utoipa::path(
    get,
    path = "/api/images",
    tag = "images",
    responses(
        (status = 200, description = "Stored images", body = GalleryResponse),
        (status = 500, description = "Storage unavailable", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, headers))]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<GalleryResponse>, HttpAppError> {
    let public_base = public_base_url(&headers, state.config.base.server_port);

    let mut objects = state.storage.list().await?;
    objects.sort_by(|a, b| b.modified.cmp(&a.modified));

    let files = objects
        .into_iter()
        .map(|object| GalleryEntry {
            url: format!("{}/{}", public_base, object.filename),
            filename: object.filename,
            size: object.size,
            uploaded_at: object.modified,
        })
        .collect();

    Ok(Json(GalleryResponse {
        success: true,
        files,
    }))
}

/// Delete a stored image by its generated filename
#[utoipa::path(
    delete,
    path = "/api/images/{filename}",
    tag = "images",
    params(
        ("filename" = String, Path, description = "Generated storage filename")
    ),
    responses(
        (status = 200, description = "File deleted", body = DeleteResponse),
        (status = 400, description = "Not a plain filename", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    state.storage.delete(&filename).await?;
    Ok(Json(DeleteResponse::deleted()))
}
