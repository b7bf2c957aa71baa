//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use pixvault_core::constants::UPLOAD_PATH;
use pixvault_infra::{
    cors_layer, make_request_span, redact_sensitive_errors, request_id_middleware,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = cors_layer(&state.config.base)?;
    let concurrency_limit = state.config.base.http_concurrency_limit;
    let body_limit = state.config.max_body_bytes;
    let production = state.config.base.is_production();

    tracing::info!(
        http_concurrency_limit = concurrency_limit,
        body_limit,
        "HTTP limits configured"
    );

    let app = Router::new()
        .route(UPLOAD_PATH, post(handlers::upload::relay_upload))
        .route("/health", get(handlers::health::health_check))
        .layer(ConcurrencyLimitLayer::new(concurrency_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(axum::middleware::from_fn_with_state(
            production,
            redact_sensitive_errors,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}
