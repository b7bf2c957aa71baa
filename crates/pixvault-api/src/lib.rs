//! Pixvault Storage Backend
//!
//! Receives relayed uploads, admits them through the ingress filter, sniffs
//! each file's signature, persists the accepted ones and reports the rest.
//! Also serves the gallery listing, delete and static retrieval endpoints.

mod api_doc;
mod handlers;
pub mod services;
pub mod setup;

pub mod error;
pub mod state;

pub use api_doc::ApiDoc;
pub use error::HttpAppError;
pub use state::AppState;
