//! Upload pipeline
//!
//! ingress filter → signature validator → persistence partitioner.
//! Admission failures abort with an `AppError`; per-file problems are
//! folded into the `UploadResponse`.

pub mod ingress;
pub mod partition;
pub mod validator;

use axum::extract::Multipart;
use pixvault_core::{AppError, UploadResponse};

use crate::state::AppState;
use ingress::IngressLimits;

pub use ingress::ReceivedFile;
pub use validator::CheckedFile;

/// Runs the upload pipeline against the application state.
pub struct UploadService<'a> {
    state: &'a AppState,
}

impl<'a> UploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn limits(&self) -> IngressLimits {
        IngressLimits {
            max_files: self.state.config.max_files,
            max_file_size_bytes: self.state.config.max_file_size_bytes,
        }
    }

    pub async fn upload(
        &self,
        multipart: &mut Multipart,
        public_base: &str,
    ) -> Result<UploadResponse, AppError> {
        let files = ingress::receive_files(multipart, &self.state.temp, self.limits()).await?;
        let received = files.len();

        let checked = validator::validate_all(files).await;
        debug_assert_eq!(checked.len(), received);

        Ok(partition::partition(checked, self.state.storage.as_ref(), public_base).await)
    }
}
