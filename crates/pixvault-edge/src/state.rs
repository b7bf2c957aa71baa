//! Application state shared by every handler.

use crate::capture::FormSchema;
use crate::relay::RelayClient;
use pixvault_core::EdgeConfig;
use pixvault_storage::TempArea;

#[derive(Clone)]
pub struct AppState {
    pub config: EdgeConfig,
    /// Spool area for captured file parts
    pub temp: TempArea,
    /// Fields accepted at capture
    pub schema: FormSchema,
    pub relay: RelayClient,
}
