//! Tower layers shared by both HTTP services.

use axum::extract::Request;
use axum::http::{HeaderValue, Method};
use pixvault_core::BaseConfig;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::get_request_id;

/// Setup CORS configuration
pub fn cors_layer(config: &BaseConfig) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

/// Span for `TraceLayer::make_span_with`, tagged with the request id.
///
/// The request id middleware must sit outside the trace layer.
pub fn make_request_span(request: &Request) -> tracing::Span {
    let request_id = get_request_id(request).unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
