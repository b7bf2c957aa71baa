//! Shared constants
//!
//! Paths and limits that both processes must agree on. Limits here are the
//! defaults; the effective values live in `BackendConfig`.

/// Upload endpoint path, identical on the edge and the backend.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Gallery listing path on the backend.
pub const IMAGES_PATH: &str = "/api/images";

/// URL prefix under which accepted files are served read-only.
pub const PUBLIC_PATH_PREFIX: &str = "/uploads";

/// Multipart field carrying the image parts.
pub const FILES_FIELD: &str = "images";

/// Default cap on the number of files per request.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Default per-file size cap in MiB.
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 5;

/// Default backend base URL used by the edge.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Header used to correlate one request across both processes.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
