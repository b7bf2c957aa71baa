//! Pixvault Edge Relay
//!
//! Accepts the browser's multipart upload, spools the file parts to a local
//! temp area, rebuilds the form and relays it to the storage backend. Temp
//! files are removed once the relay call has finished, whatever its outcome.

pub mod capture;
pub mod cleanup;
pub mod error;
mod handlers;
pub mod relay;
pub mod setup;
pub mod state;

pub use capture::{capture, Cardinality, CapturedForm, FieldKind, FormSchema, UploadedFilePart};
pub use cleanup::CleanupGuard;
pub use error::HttpAppError;
pub use relay::{FilePartSpec, RelayClient, RelayError, RelayPayload};
pub use state::AppState;
