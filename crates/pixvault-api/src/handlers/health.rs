use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "pixvault-api";

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is running"))
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}
