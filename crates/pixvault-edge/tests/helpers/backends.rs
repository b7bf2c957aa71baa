//! Stand-in backends for exercising the relay in isolation.

use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pixvault_core::constants::{REQUEST_ID_HEADER, UPLOAD_PATH};
use serde_json::{json, Value};
use std::time::Duration;

/// Answers with a description of every part it received, in order.
pub fn echo() -> Router {
    async fn handler(headers: HeaderMap, mut multipart: Multipart) -> Json<Value> {
        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().map(str::to_string);
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.unwrap();
            parts.push(json!({
                "name": name,
                "file_name": file_name,
                "content_type": content_type,
                "len": bytes.len(),
                "text": if file_name.is_none() {
                    Some(String::from_utf8_lossy(&bytes).into_owned())
                } else {
                    None
                },
            }));
        }

        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Json(json!({ "parts": parts, "request_id": request_id }))
    }

    Router::new().route(UPLOAD_PATH, post(handler))
}

/// Never answers within a test's relay timeout.
pub fn slow(delay: Duration) -> Router {
    Router::new().route(
        UPLOAD_PATH,
        post(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({ "success": true }))
        }),
    )
}

/// Answers 200 with a body that is not JSON.
pub fn not_json() -> Router {
    Router::new().route(UPLOAD_PATH, post(|| async { (StatusCode::OK, "stored") }))
}
