//! Pure REST client for the HR management backend.
//!
//! Wraps the handful of read endpoints the dashboard screens consume. Every
//! request carries the session's bearer token when one is present, and
//! non-success statuses are mapped onto [`ApiError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use hr_client::{HrApi, HrClient, Session};
//!
//! let client = HrClient::from_env()?;
//! let session = Session::with_token(token).employee_id("42");
//!
//! let employee = client.employee(&session, "42").await?;
//! let history = client.employee_history(&session, "42").await?;
//! ```

pub mod error;
pub mod history;
#[cfg(any(test, feature = "testing"))]
pub mod mock;
pub mod session;
pub mod types;

pub use error::{ApiError, Result};
pub use history::normalize_history;
#[cfg(any(test, feature = "testing"))]
pub use mock::MockHrApi;
pub use session::Session;
pub use types::{
    ApiResponse, AttendanceSummary, Avatar, Employee, HistoryEntry, JobTitle, NamedRef,
    StatusTone,
};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Read operations the dashboard needs from the backend.
#[async_trait]
pub trait HrApi: Send + Sync {
    /// `GET /employees/{id}`. `None` when the backend has no data.
    async fn employee(&self, session: &Session, id: &str) -> Result<Option<Employee>>;

    /// `GET /employees/profile/{id}`
    async fn avatar(&self, session: &Session, id: &str) -> Result<Option<Avatar>>;

    /// `GET /employee-history/employee/{id}`
    async fn employee_history(&self, session: &Session, id: &str) -> Result<Vec<HistoryEntry>>;

    /// `GET /attendance/dashboard-summary`
    async fn attendance_summary(&self, session: &Session) -> Result<Option<AttendanceSummary>>;
}

/// HTTP implementation of [`HrApi`].
#[derive(Clone)]
pub struct HrClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HrClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment variable `HR_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("HR_API_BASE_URL")
            .map_err(|_| ApiError::Config("HR_API_BASE_URL not set".into()))?;
        Ok(Self::new(base_url))
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_value(&self, session: &Session, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!(%url, authenticated = session.has_token(), "GET");

        let mut request = self
            .http_client
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = session.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "Request failed");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "Non-success response");
            return Err(ApiError::from_status(status.as_u16(), path, body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> Result<Option<T>> {
        let value = self.get_value(session, path).await?;
        let envelope: ApiResponse<T> = serde_json::from_value(value)?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl HrApi for HrClient {
    async fn employee(&self, session: &Session, id: &str) -> Result<Option<Employee>> {
        self.get_data(session, &format!("/employees/{}", id)).await
    }

    async fn avatar(&self, session: &Session, id: &str) -> Result<Option<Avatar>> {
        self.get_data(session, &format!("/employees/profile/{}", id))
            .await
    }

    async fn employee_history(&self, session: &Session, id: &str) -> Result<Vec<HistoryEntry>> {
        let body = self
            .get_value(session, &format!("/employee-history/employee/{}", id))
            .await?;
        let entries = normalize_history(body);
        debug!(employee_id = id, count = entries.len(), "Fetched employee history");
        Ok(entries)
    }

    async fn attendance_summary(&self, session: &Session) -> Result<Option<AttendanceSummary>> {
        self.get_data(session, "/attendance/dashboard-summary").await
    }
}
