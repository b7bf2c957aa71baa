//! Pixvault Infrastructure Library
//!
//! Shared infrastructure used by both the edge relay and the storage backend:
//! - Middleware (request ID, sensitive error redaction)
//! - CORS and trace span layers
//! - Telemetry initialization
//! - The uniform JSON error body and its renderer

pub mod error;
pub mod layers;
pub mod middleware;
pub mod telemetry;

// Re-export commonly used types
pub use error::{render_app_error, ErrorResponse, SensitiveDetail};
pub use layers::{cors_layer, make_request_span};
pub use middleware::{
    get_request_id, redact_sensitive_errors, request_id_middleware, RequestId,
};
pub use telemetry::{init_telemetry, shutdown_telemetry};
