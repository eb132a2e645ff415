//! Session context shared by every screen.
//!
//! Holds the bearer token and the signed-in user's identity. It is built once
//! at startup and passed explicitly to whatever needs it.

use secrecy::{ExposeSecret, SecretString};

/// Role that may delete other employees.
pub const OWNER_ROLE: &str = "OWNER";

#[derive(Debug, Default)]
pub struct Session {
    token: Option<SecretString>,
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_email: Option<String>,
    pub role: Option<String>,
    pub organization_id: Option<String>,
}

impl Session {
    /// Session carrying only a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::default().token(token)
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    pub fn employee_id(mut self, id: impl Into<String>) -> Self {
        self.employee_id = Some(id.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn company_email(mut self, email: impl Into<String>) -> Self {
        self.company_email = Some(email.into());
        self
    }

    /// Bearer token, if a non-blank one is present.
    pub fn bearer(&self) -> Option<&str> {
        self.token
            .as_ref()
            .map(|t| t.expose_secret())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.bearer().is_some()
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    pub fn is_owner(&self) -> bool {
        self.role.as_deref() == Some(OWNER_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_not_a_token() {
        assert!(!Session::default().has_token());
        assert!(!Session::with_token("   ").has_token());
        assert!(Session::with_token("abc").has_token());
        assert_eq!(Session::with_token("abc").bearer(), Some("abc"));
    }

    #[test]
    fn test_token_is_redacted_in_debug() {
        let session = Session::with_token("super-secret");
        assert!(!format!("{session:?}").contains("super-secret"));
    }

    #[test]
    fn test_full_name_and_owner() {
        let session = Session::default().name("Ada", "").role("OWNER");
        assert_eq!(session.full_name(), "Ada");
        assert!(session.is_owner());
        assert!(!Session::default().role("ADMIN").is_owner());
    }
}
