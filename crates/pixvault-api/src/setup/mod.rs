//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use pixvault_core::BackendConfig;
use pixvault_storage::{LocalStorage, Storage, TempArea};
use std::sync::Arc;

/// Build the state shared by every handler: durable storage and spool area.
pub async fn build_state(config: BackendConfig) -> Result<Arc<AppState>> {
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(&config.upload_dir)
            .await
            .context("Failed to initialize upload storage")?,
    );

    let temp = TempArea::new(&config.temp_dir).await.with_context(|| {
        format!(
            "Failed to create temp directory {}",
            config.temp_dir.display()
        )
    })?;

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        temp_dir = %temp.dir().display(),
        "Storage initialized"
    );

    Ok(Arc::new(AppState {
        config,
        storage,
        temp,
    }))
}

/// Initialize the entire application
pub async fn initialize_app(config: BackendConfig) -> Result<(Arc<AppState>, axum::Router)> {
    config.validate().context("Configuration validation failed")?;

    pixvault_infra::init_telemetry("pixvault-api", &config.base.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let state = build_state(config).await?;
    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}
