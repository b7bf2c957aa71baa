use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ErrorResponse, SensitiveDetail};

/// Strip the `error` detail from sensitive error bodies.
///
/// Mount with `from_fn_with_state(config.base.is_production(), ..)`; in
/// non-production processes responses pass through untouched.
pub async fn redact_sensitive_errors(
    State(production): State<bool>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if !production {
        return response;
    }

    let Some(SensitiveDetail(body)) = response.extensions_mut().remove::<SensitiveDetail>() else {
        return response;
    };

    let status = response.status();
    let redacted = ErrorResponse {
        error: None,
        ..body
    };
    (status, Json(redacted)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::render_app_error;
    use axum::{routing::get, Router};
    use axum_test::TestServer;
    use pixvault_core::AppError;
    use serde_json::Value;

    fn server(production: bool) -> TestServer {
        let app = Router::new()
            .route(
                "/internal",
                get(|| async { render_app_error(&AppError::Internal("disk detail".into())) }),
            )
            .route(
                "/relay",
                get(|| async { render_app_error(&AppError::Relay("backend down".into())) }),
            )
            .layer(axum::middleware::from_fn_with_state(
                production,
                redact_sensitive_errors,
            ));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn production_hides_sensitive_detail() {
        let response = server(true).get("/internal").await;

        assert_eq!(response.status_code(), 500);
        let body: Value = response.json();
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn development_keeps_sensitive_detail() {
        let body: Value = server(false).get("/internal").await.json();
        assert_eq!(body["error"], "Internal error: disk detail");
    }

    #[tokio::test]
    async fn production_keeps_non_sensitive_detail() {
        let body: Value = server(true).get("/relay").await.json();
        assert_eq!(body["error"], "Relay failed: backend down");
    }
}
