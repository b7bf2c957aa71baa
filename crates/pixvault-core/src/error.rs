//! Error types module
//!
//! All request-level failures of both processes are unified under `AppError`.
//! Per-file validation problems are not errors: they become a rejected
//! `ValidationVerdict` and are folded into the aggregate response.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like admission rejections
    Debug,
    /// Warning level - for failures caused by a peer (relay, malformed body)
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "FILE_TOO_LARGE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message, rendered as `message` in the JSON body
    fn client_message(&self) -> String;

    /// Whether the detail string should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No files uploaded")]
    NoFiles,

    #[error("Too many files: more than {max}")]
    TooManyFiles { max: usize },

    #[error("File too large: {filename} exceeds {max_bytes} bytes")]
    FileTooLarge { filename: String, max_bytes: usize },

    #[error("Not an image: {filename} declared as {content_type}")]
    NotAnImage {
        filename: String,
        content_type: String,
    },

    #[error("Malformed multipart body: {0}")]
    MalformedMultipart(String),

    #[error("Unexpected form field: {0}")]
    UnexpectedField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Relay failed: {0}")]
    Relay(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::NoFiles => (400, "NO_FILES", false, LogLevel::Debug),
        AppError::TooManyFiles { .. } => (400, "TOO_MANY_FILES", false, LogLevel::Debug),
        AppError::FileTooLarge { .. } => (400, "FILE_TOO_LARGE", false, LogLevel::Debug),
        AppError::NotAnImage { .. } => (400, "NOT_AN_IMAGE", false, LogLevel::Debug),
        AppError::UnexpectedField(_) => (400, "UNEXPECTED_FIELD", false, LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", false, LogLevel::Debug),
        AppError::MalformedMultipart(_) => (500, "MALFORMED_MULTIPART", false, LogLevel::Warn),
        AppError::Relay(_) => (500, "RELAY_FAILED", false, LogLevel::Warn),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::NoFiles => "NoFiles",
            AppError::TooManyFiles { .. } => "TooManyFiles",
            AppError::FileTooLarge { .. } => "FileTooLarge",
            AppError::NotAnImage { .. } => "NotAnImage",
            AppError::MalformedMultipart(_) => "MalformedMultipart",
            AppError::UnexpectedField(_) => "UnexpectedField",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::Storage(_) => "Storage",
            AppError::Relay(_) => "Relay",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Detail string rendered as `error` in the JSON body. `None` when the
    /// client message already says everything.
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::NoFiles | AppError::TooManyFiles { .. } => None,
            AppError::FileTooLarge { filename, .. } => Some(format!("{} exceeds the limit", filename)),
            AppError::NotAnImage {
                filename,
                content_type,
            } => Some(format!("{} has type {}", filename, content_type)),
            _ => Some(self.detailed_message()),
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::NoFiles => "No files uploaded".to_string(),
            AppError::TooManyFiles { max } => format!("Too many files. Maximum is {} files.", max),
            AppError::FileTooLarge { max_bytes, .. } => format!(
                "File too large. Maximum size is {}MB.",
                max_bytes / 1024 / 1024
            ),
            AppError::NotAnImage { .. } => "Only image files are allowed!".to_string(),
            AppError::MalformedMultipart(_) => "Error uploading files".to_string(),
            AppError::UnexpectedField(ref name) => format!("Unexpected form field: {}", name),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::Relay(_) => "Error uploading files".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}
