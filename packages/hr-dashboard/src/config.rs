use anyhow::{Context, Result};
use dotenvy::dotenv;
use hr_client::Session;
use std::env;
use std::time::Duration;

/// Console configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub session: Session,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = lookup("HR_API_BASE_URL").context("HR_API_BASE_URL must be set")?;

        let timeout_secs: u64 = lookup("HR_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("HR_REQUEST_TIMEOUT_SECS must be a valid number")?;

        let mut session = Session::default();
        if let Some(token) = lookup("HR_API_TOKEN") {
            session = session.token(token);
        }
        session.employee_id = lookup("HR_EMPLOYEE_ID");
        session.first_name = lookup("HR_FIRST_NAME");
        session.last_name = lookup("HR_LAST_NAME");
        session.company_email = lookup("HR_COMPANY_EMAIL");
        session.role = lookup("HR_ROLE");
        session.organization_id = lookup("HR_ORGANIZATION_ID");

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_requires_base_url() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn test_builds_session() {
        let config = Config::from_lookup(lookup(&[
            ("HR_API_BASE_URL", "http://localhost:8080"),
            ("HR_API_TOKEN", "abc"),
            ("HR_EMPLOYEE_ID", "42"),
            ("HR_ROLE", "OWNER"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.session.has_token());
        assert_eq!(config.session.employee_id.as_deref(), Some("42"));
        assert!(config.session.is_owner());
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let result = Config::from_lookup(lookup(&[
            ("HR_API_BASE_URL", "http://localhost:8080"),
            ("HR_REQUEST_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }
}
