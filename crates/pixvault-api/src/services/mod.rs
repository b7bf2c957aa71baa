//! Business logic behind the HTTP handlers.

pub mod upload;

use axum::http::{header, HeaderMap};
use pixvault_core::constants::PUBLIC_PATH_PREFIX;

/// Static prefix as observed by the caller: `{proto}://{host}/uploads`.
///
/// Honours `X-Forwarded-Proto` from a reverse proxy; falls back to
/// `localhost:{port}` when the request carries no `Host`.
pub fn public_base_url(headers: &HeaderMap, port: u16) -> String {
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "http".to_string());

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", port));

    format!("{}://{}{}", proto, host, PUBLIC_PATH_PREFIX)
}
