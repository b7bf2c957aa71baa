//! Pixvault Storage Library
//!
//! Two kinds of file ownership live here:
//!
//! - **Temporary** files (`temp`): spooled request parts under a per-process
//!   spool directory. Each is owned by a `TempFile` guard and removed exactly
//!   once, either explicitly or when the guard is dropped.
//! - **Durable** files (`local`): accepted uploads persisted under a generated
//!   name (`{uuid}-{millis}{.ext}`) in the storage root.
//!
//! Stored filenames are flat: they never contain a path separator or `..`.

pub(crate) mod keys;
pub mod local;
pub mod temp;
pub mod traits;

// Re-export commonly used types
pub use keys::generate_filename;
pub use local::LocalStorage;
pub use temp::{SpoolError, SpooledFile, TempArea, TempFile};
pub use traits::{PersistedFile, Storage, StorageError, StorageResult, StoredObject};
