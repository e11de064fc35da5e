//! Error types module
//!
//! Service errors are unified under the `AppError` enum. Each variant
//! self-describes how it is presented over HTTP through the `ErrorMetadata` trait.
//!
//! An unknown media id is *not* an error: lookups return `Ok(None)` and the
//! media handler answers 404 directly.

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details must be hidden from clients even outside production
    fn is_sensitive(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The media store failed (I/O, backend unreachable, corrupt metadata).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// (http_status, error_code, recoverable, suggested_action, sensitive) per variant.
type StaticMetadata = (u16, &'static str, bool, Option<&'static str>, bool);

fn app_error_static_metadata(err: &AppError) -> StaticMetadata {
    match err {
        AppError::Storage(_) => (
            500,
            "STORAGE_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
        ),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", false, None, false),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_storage() {
        let err = AppError::Storage("bucket unreachable".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert!(err.is_recoverable());
        assert_eq!(err.suggested_action(), Some("Retry after a short delay"));
        assert_eq!(err.client_message(), "Failed to access storage");
        assert!(err.is_sensitive());
        assert_eq!(err.error_type(), "Storage");
    }

    #[test]
    fn test_error_metadata_internal() {
        let err = AppError::Internal("invalid header value".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(!err.is_recoverable());
        assert_eq!(err.suggested_action(), None);
        assert_eq!(err.client_message(), "Internal server error");
        assert!(!err.is_sensitive());
        assert_eq!(err.to_string(), "Internal error: invalid header value");
    }
}
