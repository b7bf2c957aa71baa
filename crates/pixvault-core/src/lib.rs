//! Pixvault Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! content validation shared by the edge relay and the storage backend.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{BackendConfig, BaseConfig, EdgeConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    DeleteResponse, GalleryEntry, GalleryResponse, StoredFile, UploadResponse, ValidationVerdict,
};
