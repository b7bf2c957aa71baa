//! Shared HTTP middleware for Pixvault services

pub mod redact;
pub mod request_id;

pub use redact::redact_sensitive_errors;
pub use request_id::{get_request_id, request_id_middleware, RequestId};
