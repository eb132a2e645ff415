//! Standalone employee history screen.

use hr_client::{HistoryEntry, HrApi, Session};

use crate::error::label;
use crate::lazy::{LazyLoader, LazyState};

pub struct EmployeeHistoryPage {
    employee_id: String,
    history: LazyLoader<Vec<HistoryEntry>>,
}

impl EmployeeHistoryPage {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            history: LazyLoader::new(label::HISTORY),
        }
    }

    pub fn history(&self) -> &LazyState<Vec<HistoryEntry>> {
        self.history.state()
    }

    pub async fn mount(&mut self, api: &dyn HrApi, session: &Session) {
        let employee_id = self.employee_id.clone();
        self.history
            .ensure_loaded(session, &employee_id, || {
                api.employee_history(session, &employee_id)
            })
            .await;
    }

    /// Navigate to another employee; the next mount fetches again.
    pub fn show(&mut self, employee_id: impl Into<String>) {
        self.employee_id = employee_id.into();
        self.history.set_parent(&self.employee_id);
    }
}
