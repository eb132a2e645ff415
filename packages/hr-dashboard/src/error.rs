//! User-facing load errors.
//!
//! Everything that goes wrong while fetching ends up here, converted at the
//! controller boundary. The renderers only ever see the message.

use hr_client::ApiError;
use thiserror::Error;

/// Labels used in user-facing messages.
pub mod label {
    pub const EMPLOYEE: &str = "employee data";
    pub const EMPLOYEE_ID: &str = "employee ID";
    pub const HISTORY: &str = "employee history";
    pub const ATTENDANCE: &str = "attendance data";
}

/// Why a resource could not be shown. Carries the resource label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("You are not authorized to view {0}.")]
    Unauthorized(&'static str),

    #[error("You don't have permission to view {0}.")]
    Forbidden(&'static str),

    #[error("Failed to load {0}. Please try again.")]
    LoadFailed(&'static str),

    #[error("No {0} available.")]
    NotFound(&'static str),
}

impl LoadError {
    /// Convert a client error. Only the auth statuses keep their identity.
    pub fn from_api(label: &'static str, error: &ApiError) -> Self {
        match error {
            ApiError::Unauthorized => LoadError::Unauthorized(label),
            ApiError::Forbidden => LoadError::Forbidden(label),
            _ => LoadError::LoadFailed(label),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_messages() {
        assert_eq!(
            LoadError::from_api(label::HISTORY, &ApiError::Unauthorized).message(),
            "You are not authorized to view employee history."
        );
        assert_eq!(
            LoadError::from_api(label::HISTORY, &ApiError::Forbidden).message(),
            "You don't have permission to view employee history."
        );
        assert_eq!(
            LoadError::from_api(
                label::HISTORY,
                &ApiError::Status {
                    status: 500,
                    message: "stack trace".into()
                }
            )
            .message(),
            "Failed to load employee history. Please try again."
        );
    }

    #[test]
    fn test_not_found_collapses_to_load_failed() {
        let err = ApiError::NotFound {
            path: "/employees/1".into(),
        };
        assert_eq!(
            LoadError::from_api(label::EMPLOYEE, &err),
            LoadError::LoadFailed(label::EMPLOYEE)
        );
        assert_eq!(
            LoadError::NotFound(label::EMPLOYEE_ID).message(),
            "No employee ID available."
        );
    }
}
