//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::capture::FormSchema;
use crate::relay::RelayClient;
use crate::state::AppState;
use anyhow::{Context, Result};
use pixvault_core::EdgeConfig;
use pixvault_storage::TempArea;
use std::sync::Arc;

/// Build the edge state with the default upload form schema.
pub async fn build_state(config: EdgeConfig) -> Result<Arc<AppState>> {
    build_state_with_schema(config, FormSchema::upload_form()).await
}

pub async fn build_state_with_schema(
    config: EdgeConfig,
    schema: FormSchema,
) -> Result<Arc<AppState>> {
    let temp = TempArea::new(&config.temp_dir).await.with_context(|| {
        format!(
            "Failed to create temp directory {}",
            config.temp_dir.display()
        )
    })?;

    let relay = RelayClient::new(&config.backend_url, config.relay_timeout)
        .context("Failed to create relay client")?;

    tracing::info!(
        upload_url = %relay.upload_url(),
        backend_url = %relay.base_url(),
        temp_dir = %temp.dir().display(),
        relay_timeout_secs = config.relay_timeout.as_secs(),
        "Relay initialized"
    );

    Ok(Arc::new(AppState {
        config,
        temp,
        schema,
        relay,
    }))
}

/// Initialize the entire application
pub async fn initialize_app(config: EdgeConfig) -> Result<(Arc<AppState>, axum::Router)> {
    config.validate().context("Configuration validation failed")?;

    pixvault_infra::init_telemetry("pixvault-edge", &config.base.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let state = build_state(config).await?;
    let router = routes::setup_routes(state.clone())?;

    Ok((state, router))
}
