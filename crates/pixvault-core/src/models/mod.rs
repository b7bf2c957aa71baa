//! Domain models exchanged between the pipeline stages and over the wire.

mod gallery;
mod stored_file;
mod upload;
mod verdict;

pub use gallery::{DeleteResponse, GalleryEntry, GalleryResponse};
pub use stored_file::StoredFile;
pub use upload::UploadResponse;
pub use verdict::ValidationVerdict;
