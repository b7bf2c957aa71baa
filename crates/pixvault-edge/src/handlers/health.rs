use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "pixvault-edge";

/// Liveness check
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}
