//! Personal page: one employee's details with a lazily loaded history tab.

use hr_client::{Avatar, Employee, HistoryEntry, HrApi, Session};
use tracing::{info, warn};

use crate::controller::{LoadStatus, ResourceController};
use crate::error::{label, LoadError};
use crate::lazy::{LazyLoader, LazyState};

/// Tabs on the personal page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Personal,
    History,
    Emergency,
    Bank,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Personal => "Personal",
            Tab::History => "Employee History",
            Tab::Emergency => "Emergency Contact",
            Tab::Bank => "Bank Account",
        }
    }

    pub fn variants() -> &'static [Tab] {
        &[Tab::Personal, Tab::History, Tab::Emergency, Tab::Bank]
    }
}

pub struct PersonalPage {
    requested_id: Option<String>,
    employee: ResourceController<Employee>,
    avatar: Option<Avatar>,
    history: LazyLoader<Vec<HistoryEntry>>,
    active_tab: Tab,
}

impl PersonalPage {
    /// `requested_id` overrides the signed-in employee.
    pub fn new(requested_id: Option<String>) -> Self {
        Self {
            requested_id: requested_id.filter(|id| !id.trim().is_empty()),
            employee: ResourceController::new(label::EMPLOYEE),
            avatar: None,
            history: LazyLoader::new(label::HISTORY),
            active_tab: Tab::Personal,
        }
    }

    /// Employee to show: the requested one, else the signed-in one.
    pub fn effective_id(&self, session: &Session) -> Option<String> {
        self.requested_id.clone().or_else(|| {
            session
                .employee_id
                .clone()
                .filter(|id| !id.trim().is_empty())
        })
    }

    pub fn employee(&self) -> &ResourceController<Employee> {
        &self.employee
    }

    pub fn avatar(&self) -> Option<&Avatar> {
        self.avatar.as_ref()
    }

    pub fn history(&self) -> &LazyState<Vec<HistoryEntry>> {
        self.history.state()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Initial load. Also used to refresh after an edit.
    pub async fn mount(&mut self, api: &dyn HrApi, session: &Session) {
        let Some(id) = self.effective_id(session) else {
            warn!("No employee ID available");
            self.employee
                .reject(LoadError::NotFound(label::EMPLOYEE_ID));
            return;
        };

        let previous = self.employee.resource().key.clone();
        self.employee.load(&id, api.employee(session, &id)).await;
        if previous.as_deref() != Some(id.as_str()) {
            self.avatar = None;
        }

        if self.employee.status() != LoadStatus::Loaded {
            return;
        }
        let Some(employee_id) = self.employee.payload().map(|e| e.employee_id.clone()) else {
            self.avatar = None;
            return;
        };

        // fresh employee data invalidates whatever history was shown
        self.history.set_parent(&employee_id);
        self.history.reset();

        self.avatar = match api.avatar(session, &employee_id).await {
            Ok(Some(avatar)) => match avatar.decode() {
                Ok(_) => Some(avatar),
                Err(e) => {
                    warn!(employee_id = %employee_id, error = %e, "Avatar image is not valid base64");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(employee_id = %employee_id, error = %e, "Failed to fetch avatar image");
                None
            }
        };

        if self.active_tab == Tab::History {
            self.load_history(api, session).await;
        }
    }

    pub async fn refresh(&mut self, api: &dyn HrApi, session: &Session) {
        info!("Refreshing employee data");
        self.mount(api, session).await;
    }

    /// Switch tabs. Showing the history tab loads it once.
    pub async fn activate(&mut self, tab: Tab, api: &dyn HrApi, session: &Session) {
        self.active_tab = tab;
        if tab == Tab::History {
            self.load_history(api, session).await;
        }
    }

    async fn load_history(&mut self, api: &dyn HrApi, session: &Session) {
        let Some(employee_id) = self.employee.payload().map(|e| e.employee_id.clone()) else {
            return;
        };
        self.history
            .ensure_loaded(session, &employee_id, || {
                api.employee_history(session, &employee_id)
            })
            .await;
    }

    /// Owners may delete anyone but themselves.
    pub fn can_delete(&self, session: &Session) -> bool {
        let Some(employee) = self.employee.payload() else {
            return false;
        };
        session.is_owner() && session.employee_id.as_deref() != Some(employee.employee_id.as_str())
    }

    /// Drop in-flight responses when leaving the screen.
    pub fn unmount(&mut self) {
        self.employee.invalidate();
        self.history.reset();
    }
}
