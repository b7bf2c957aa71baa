//! Test helpers: a live backend on a loopback port and an edge `TestServer`
//! relaying to it.
//!
//! The relay goes over real HTTP, so backends are served with `axum::serve`
//! on `127.0.0.1:0` rather than through the mock transport.

#![allow(dead_code)]

pub mod backends;

use axum::Router;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use pixvault_core::{BackendConfig, EdgeConfig};
use pixvault_edge::setup::{build_state_with_schema, routes};
use pixvault_edge::{AppState, FormSchema};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A running backend and the directories it writes to.
pub struct TestBackend {
    pub url: String,
    pub upload_dir: TempDir,
    pub temp_dir: TempDir,
}

impl TestBackend {
    pub fn stored_entries(&self) -> usize {
        count_entries(self.upload_dir.path())
    }

    pub fn temp_entries(&self) -> usize {
        count_entries(self.temp_dir.path())
    }
}

/// Edge under test plus its spool directory.
pub struct TestEdge {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub temp_dir: TempDir,
}

impl TestEdge {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn temp_entries(&self) -> usize {
        count_entries(self.temp_dir.path())
    }
}

pub fn count_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

/// Serve `router` on an ephemeral loopback port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}

/// A URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}", addr)
}

/// Start the real pixvault backend with fresh directories.
pub async fn spawn_backend() -> TestBackend {
    let upload_dir = tempfile::tempdir().expect("Failed to create upload directory");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let upload = upload_dir.path().display().to_string();
    let temp = temp_dir.path().display().to_string();
    let config = BackendConfig::from_lookup(|key| match key {
        "UPLOAD_DIR" => Some(upload.clone()),
        "UPLOAD_TEMP_DIR" => Some(temp.clone()),
        _ => None,
    })
    .expect("Failed to build backend config");

    let state = pixvault_api::setup::build_state(config)
        .await
        .expect("Failed to build backend state");
    let router =
        pixvault_api::setup::routes::setup_routes(state).expect("Failed to build backend routes");

    TestBackend {
        url: serve(router).await,
        upload_dir,
        temp_dir,
    }
}

pub fn edge_config(backend_url: &str, temp_dir: &Path, extra: &[(&str, &str)]) -> EdgeConfig {
    let backend_url = backend_url.to_string();
    let temp_dir = temp_dir.display().to_string();
    let extra: Vec<(String, String)> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    EdgeConfig::from_lookup(|key| match key {
        "BACKEND_URL" => Some(backend_url.clone()),
        "EDGE_TEMP_DIR" => Some(temp_dir.clone()),
        _ => extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()),
    })
    .expect("Failed to build edge config")
}

/// Edge relaying to `backend_url` with the default upload form.
pub async fn setup_edge(backend_url: &str) -> TestEdge {
    setup_edge_with(backend_url, FormSchema::upload_form(), &[]).await
}

pub async fn setup_edge_with(
    backend_url: &str,
    schema: FormSchema,
    extra: &[(&str, &str)],
) -> TestEdge {
    let temp_dir = tempfile::tempdir().expect("Failed to create edge temp directory");
    let config = edge_config(backend_url, temp_dir.path(), extra);

    let state = build_state_with_schema(config, schema)
        .await
        .expect("Failed to build edge state");
    let router = routes::setup_routes(state.clone()).expect("Failed to build edge routes");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestEdge {
        server,
        state,
        temp_dir,
    }
}

pub fn image_part(bytes: Vec<u8>, filename: &str, mime: &str) -> Part {
    Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_type(mime.to_string())
}

pub fn images_form(parts: Vec<Part>) -> MultipartForm {
    parts
        .into_iter()
        .fold(MultipartForm::new(), |form, part| form.add_part("images", part))
}

/// An 8-byte PNG signature followed by a little padding.
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0u8; 24]);
    bytes
}

/// Declared as PNG, signature wrong.
pub fn corrupt_png_bytes() -> Vec<u8> {
    let mut bytes = png_bytes();
    bytes[1] = b'X';
    bytes
}
