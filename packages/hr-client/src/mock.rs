//! Mock backend for testing.
//!
//! Serves canned responses and records every call so tests can assert on
//! how many requests a screen actually issued.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ApiError, Result};
use crate::history::normalize_history;
use crate::session::Session;
use crate::types::{AttendanceSummary, Avatar, Employee, HistoryEntry};
use crate::HrApi;

/// Endpoint hit by a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Employee,
    Avatar,
    History,
    Attendance,
}

/// One recorded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub endpoint: Endpoint,
    pub id: Option<String>,
    pub authenticated: bool,
}

#[derive(Debug, Clone)]
enum Reply<T> {
    Ok(T),
    Status(u16),
}

impl<T: Clone> Reply<T> {
    fn to_result(&self, path: &str) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(ApiError::from_status(*status, path, String::new())),
        }
    }
}

#[derive(Default)]
struct MockState {
    employees: HashMap<String, Reply<Option<Employee>>>,
    avatars: HashMap<String, Reply<Option<Avatar>>>,
    histories: HashMap<String, Reply<Value>>,
    attendance: Option<Reply<Option<AttendanceSummary>>>,
    calls: Vec<MockCall>,
}

/// Mock [`HrApi`] implementation.
///
/// Unconfigured resources answer with 404. The `*_empty` builders answer
/// `{"data": null}`.
///
/// # Example
///
/// ```rust,ignore
/// use hr_client::{Employee, MockHrApi};
///
/// let api = MockHrApi::new().with_employee(Employee {
///     employee_id: "42".into(),
///     ..Default::default()
/// });
/// assert_eq!(api.call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockHrApi {
    state: Arc<RwLock<MockState>>,
}

impl MockHrApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(self, employee: Employee) -> Self {
        self.state
            .write()
            .unwrap()
            .employees
            .insert(employee.employee_id.clone(), Reply::Ok(Some(employee)));
        self
    }

    pub fn with_employee_empty(self, id: &str) -> Self {
        self.state
            .write()
            .unwrap()
            .employees
            .insert(id.to_string(), Reply::Ok(None));
        self
    }

    pub fn with_employee_status(self, id: &str, status: u16) -> Self {
        self.state
            .write()
            .unwrap()
            .employees
            .insert(id.to_string(), Reply::Status(status));
        self
    }

    pub fn with_avatar(self, id: &str, avatar: Avatar) -> Self {
        self.state
            .write()
            .unwrap()
            .avatars
            .insert(id.to_string(), Reply::Ok(Some(avatar)));
        self
    }

    pub fn with_history(self, id: &str, entries: Vec<HistoryEntry>) -> Self {
        let body = serde_json::to_value(entries).unwrap();
        self.with_history_body(id, body)
    }

    /// Raw response body, run through the same normalization as the real client.
    pub fn with_history_body(self, id: &str, body: Value) -> Self {
        self.state
            .write()
            .unwrap()
            .histories
            .insert(id.to_string(), Reply::Ok(body));
        self
    }

    pub fn with_history_status(self, id: &str, status: u16) -> Self {
        self.state
            .write()
            .unwrap()
            .histories
            .insert(id.to_string(), Reply::Status(status));
        self
    }

    pub fn with_attendance(self, summary: AttendanceSummary) -> Self {
        self.state.write().unwrap().attendance = Some(Reply::Ok(Some(summary)));
        self
    }

    pub fn with_attendance_empty(self) -> Self {
        self.state.write().unwrap().attendance = Some(Reply::Ok(None));
        self
    }

    pub fn with_attendance_status(self, status: u16) -> Self {
        self.state.write().unwrap().attendance = Some(Reply::Status(status));
        self
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state.read().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.read().unwrap().calls.len()
    }

    /// Number of calls made to one endpoint.
    pub fn endpoint_calls(&self, endpoint: Endpoint) -> usize {
        self.state
            .read()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.endpoint == endpoint)
            .count()
    }

    fn record(&self, endpoint: Endpoint, id: Option<&str>, session: &Session) {
        self.state.write().unwrap().calls.push(MockCall {
            endpoint,
            id: id.map(str::to_string),
            authenticated: session.has_token(),
        });
    }
}

fn not_found(path: String) -> ApiError {
    ApiError::NotFound { path }
}

#[async_trait]
impl HrApi for MockHrApi {
    async fn employee(&self, session: &Session, id: &str) -> Result<Option<Employee>> {
        self.record(Endpoint::Employee, Some(id), session);
        let path = format!("/employees/{}", id);
        let state = self.state.read().unwrap();
        match state.employees.get(id) {
            Some(reply) => reply.to_result(&path),
            None => Err(not_found(path)),
        }
    }

    async fn avatar(&self, session: &Session, id: &str) -> Result<Option<Avatar>> {
        self.record(Endpoint::Avatar, Some(id), session);
        let path = format!("/employees/profile/{}", id);
        let state = self.state.read().unwrap();
        match state.avatars.get(id) {
            Some(reply) => reply.to_result(&path),
            None => Err(not_found(path)),
        }
    }

    async fn employee_history(&self, session: &Session, id: &str) -> Result<Vec<HistoryEntry>> {
        self.record(Endpoint::History, Some(id), session);
        let path = format!("/employee-history/employee/{}", id);
        let state = self.state.read().unwrap();
        match state.histories.get(id) {
            Some(reply) => reply.to_result(&path).map(normalize_history),
            None => Err(not_found(path)),
        }
    }

    async fn attendance_summary(&self, session: &Session) -> Result<Option<AttendanceSummary>> {
        self.record(Endpoint::Attendance, None, session);
        let path = "/attendance/dashboard-summary".to_string();
        let state = self.state.read().unwrap();
        match &state.attendance {
            Some(reply) => reply.to_result(&path),
            None => Err(not_found(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls_and_serves_statuses() {
        let api = MockHrApi::new().with_history_status("1", 403);
        let session = Session::with_token("t");

        let err = api.employee_history(&session, "1").await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));

        let err = api.employee(&Session::default(), "9").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));

        let empty = MockHrApi::new().with_attendance_empty();
        assert_eq!(empty.attendance_summary(&session).await.unwrap(), None);

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].authenticated);
        assert!(!calls[1].authenticated);
        assert_eq!(api.endpoint_calls(Endpoint::History), 1);
    }
}
