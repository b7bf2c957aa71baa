//! Test helpers: build AppState and router for integration tests.
//!
//! Every app gets its own upload and spool directories so tests can assert
//! on exactly what a request left behind.

#![allow(dead_code)]

pub mod fixtures;
pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use pixvault_api::setup::{build_state, routes};
use pixvault_api::AppState;
use pixvault_core::BackendConfig;
use pixvault_storage::Storage;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus the directories it owns.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub upload_dir: TempDir,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Files currently in the spool directory.
    pub fn temp_entries(&self) -> usize {
        count_entries(self.temp_dir.path())
    }

    /// Files currently in durable storage.
    pub fn stored_entries(&self) -> usize {
        count_entries(self.upload_dir.path())
    }
}

pub fn count_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

pub fn create_test_config(upload_dir: &Path, temp_dir: &Path) -> BackendConfig {
    create_test_config_with(upload_dir, temp_dir, &[])
}

/// Test config with extra settings, e.g. `("ENVIRONMENT", "production")`.
pub fn create_test_config_with(
    upload_dir: &Path,
    temp_dir: &Path,
    extra: &[(&str, &str)],
) -> BackendConfig {
    let upload_dir = upload_dir.display().to_string();
    let temp_dir = temp_dir.display().to_string();
    let extra: Vec<(String, String)> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    BackendConfig::from_lookup(|key| match key {
        "UPLOAD_DIR" => Some(upload_dir.clone()),
        "UPLOAD_TEMP_DIR" => Some(temp_dir.clone()),
        _ => extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()),
    })
    .expect("Failed to build test config")
}

/// Setup test app with local storage in a fresh temp directory.
pub async fn setup_test_app() -> TestApp {
    let upload_dir = tempfile::tempdir().expect("Failed to create upload directory");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config(upload_dir.path(), temp_dir.path());

    let state = build_state(config).await.expect("Failed to build state");
    let router = routes::setup_routes(state.clone()).expect("Failed to build routes");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        state,
        upload_dir,
        temp_dir,
    }
}

/// Setup test app with a custom storage backend.
pub async fn setup_test_app_with_storage(storage: Arc<dyn Storage>) -> TestApp {
    setup_test_app_with(storage, &[]).await
}

/// Setup test app with a custom storage backend and extra config settings.
pub async fn setup_test_app_with(storage: Arc<dyn Storage>, extra: &[(&str, &str)]) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("Failed to create upload directory");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config_with(upload_dir.path(), temp_dir.path(), extra);

    let base = build_state(config).await.expect("Failed to build state");
    let state = Arc::new(AppState {
        config: base.config.clone(),
        storage,
        temp: base.temp.clone(),
    });
    let router = routes::setup_routes(state.clone()).expect("Failed to build routes");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        state,
        upload_dir,
        temp_dir,
    }
}

/// One `images` file part.
pub fn image_part(bytes: Vec<u8>, filename: &str, mime: &str) -> Part {
    Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_type(mime.to_string())
}

/// Multipart form with every part under the `images` field.
pub fn images_form(parts: Vec<Part>) -> MultipartForm {
    parts
        .into_iter()
        .fold(MultipartForm::new(), |form, part| form.add_part("images", part))
}
