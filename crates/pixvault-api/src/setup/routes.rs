//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Json, Router,
};
use pixvault_core::constants::{IMAGES_PATH, PUBLIC_PATH_PREFIX, UPLOAD_PATH};
use pixvault_infra::{
    cors_layer, make_request_span, redact_sensitive_errors, request_id_middleware,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Multipart framing allowance on top of the file payloads.
const BODY_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let config = &state.config;
    let cors = cors_layer(&config.base)?;
    let concurrency_limit = config.base.http_concurrency_limit;
    let production = config.base.is_production();

    // Room for one part past the count cap so the cap, not the body limit,
    // is what rejects an eleventh file.
    let body_limit = (config.max_files + 1)
        .saturating_mul(config.max_file_size_bytes)
        .saturating_add(BODY_OVERHEAD_BYTES);

    tracing::info!(
        http_concurrency_limit = concurrency_limit,
        body_limit,
        "HTTP limits configured"
    );

    let static_files = ServeDir::new(state.storage.root());

    let app = Router::new()
        .route(UPLOAD_PATH, post(handlers::upload::upload_images))
        .route(IMAGES_PATH, get(handlers::gallery::list_images))
        .route(
            &format!("{}/{{filename}}", IMAGES_PATH),
            delete(handlers::gallery::delete_image),
        )
        .route("/health", get(handlers::health::health_check))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .nest_service(PUBLIC_PATH_PREFIX, static_files)
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
