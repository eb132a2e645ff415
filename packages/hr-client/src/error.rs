//! Error types for the HR client.

use thiserror::Error;

/// Result type for HR client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// HR client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration error (missing base URL, invalid settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// 401 from the backend, or a missing/expired token
    #[error("unauthorized")]
    Unauthorized,

    /// 403 from the backend
    #[error("forbidden")]
    Forbidden,

    /// 404 from the backend
    #[error("not found: {path}")]
    NotFound { path: String },

    /// Any other non-2xx response
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Network error (connection failed, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Map a non-success HTTP status onto the error taxonomy.
    pub fn from_status(status: u16, path: &str, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound {
                path: path.to_string(),
            },
            _ => ApiError::Status { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_auth_codes() {
        assert!(matches!(
            ApiError::from_status(401, "/x", String::new()),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(403, "/x", String::new()),
            ApiError::Forbidden
        ));
    }

    #[test]
    fn test_from_status_keeps_body_for_other_codes() {
        match ApiError::from_status(500, "/employees/1", "boom".into()) {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match ApiError::from_status(404, "/employees/1", String::new()) {
            ApiError::NotFound { path } => assert_eq!(path, "/employees/1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
