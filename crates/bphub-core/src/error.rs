//! Error types for bphub.

use thiserror::Error;

/// Result type alias using bphub's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bphub operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request query string could not be decoded
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_malformed_query() {
        let err = Error::MalformedQuery("invalid percent-encoding".to_string());
        assert_eq!(err.to_string(), "Malformed query: invalid percent-encoding");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("DATABASE_URL not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: DATABASE_URL not set");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }
}
