//! Home dashboard: today's attendance.

use hr_client::{AttendanceSummary, HrApi, Session};

use crate::controller::{Resource, ResourceController};
use crate::error::label;

/// The summary has no identity of its own; one fixed key.
const SUMMARY_KEY: &str = "dashboard-summary";

pub struct HomePage {
    attendance: ResourceController<AttendanceSummary>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            attendance: ResourceController::new(label::ATTENDANCE),
        }
    }

    pub fn attendance(&self) -> &Resource<AttendanceSummary> {
        self.attendance.resource()
    }

    pub async fn mount(&mut self, api: &dyn HrApi, session: &Session) {
        self.attendance
            .load(SUMMARY_KEY, api.attendance_summary(session))
            .await;
    }
}
