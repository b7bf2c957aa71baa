//! Application state shared by every handler.

use pixvault_core::BackendConfig;
use pixvault_storage::{Storage, TempArea};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: BackendConfig,
    /// Durable storage for accepted files
    pub storage: Arc<dyn Storage>,
    /// Spool area for files still under validation
    pub temp: TempArea,
}
