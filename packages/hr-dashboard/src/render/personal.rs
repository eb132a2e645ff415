use hr_client::{Employee, Session, StatusTone};

use super::history::{history_view, HistoryView};
use super::or_na;
use crate::controller::LoadStatus;
use crate::pages::{PersonalPage, Tab};

pub const NO_DATA_MESSAGE: &str = "No data available";
pub const NO_IMAGE: &str = "No Image";
pub const EMERGENCY_PLACEHOLDER: &str = "Emergency contact information will be displayed here.";
pub const BANK_PLACEHOLDER: &str = "Bank account details are managed in the web dashboard.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalView {
    Loading,
    Error(String),
    NoData,
    Ready(Box<PersonalCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    Personal {
        company: Vec<Field>,
        personal: Vec<Field>,
    },
    History(HistoryView),
    Placeholder(&'static str),
}

/// Side card with the avatar and headline facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub name: String,
    pub job_title: String,
    pub team: String,
    pub status: String,
    pub tone: StatusTone,
    pub email: String,
    pub phone: String,
    /// `data:` URL, or `None` for the "No Image" placeholder.
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalCard {
    /// Set when a refresh failed and older data is still on screen.
    pub notice: Option<String>,
    pub tabs: Vec<(Tab, bool)>,
    pub content: TabContent,
    pub summary: Summary,
    pub can_delete: bool,
}

pub fn personal_view(page: &PersonalPage, session: &Session) -> PersonalView {
    let resource = page.employee().resource();

    let employee = match (resource.status, resource.payload.as_ref()) {
        (LoadStatus::Idle | LoadStatus::Loading, _) => return PersonalView::Loading,
        (LoadStatus::Error, None) => {
            return PersonalView::Error(resource.error_message().unwrap_or_default())
        }
        (_, None) => return PersonalView::NoData,
        (_, Some(employee)) => employee,
    };

    let tab = page.active_tab();
    let content = match tab {
        Tab::Personal => TabContent::Personal {
            company: company_fields(employee),
            personal: personal_fields(employee),
        },
        Tab::History => TabContent::History(history_view(page.history())),
        Tab::Emergency => TabContent::Placeholder(EMERGENCY_PLACEHOLDER),
        Tab::Bank => TabContent::Placeholder(BANK_PLACEHOLDER),
    };

    PersonalView::Ready(Box::new(PersonalCard {
        notice: resource.error_message(),
        tabs: Tab::variants().iter().map(|t| (*t, *t == tab)).collect(),
        content,
        summary: Summary {
            name: employee.full_name(),
            job_title: or_na(employee.job_title()),
            team: or_na(employee.team_name()),
            status: employee.employee_status.clone().unwrap_or_default(),
            tone: employee.status_tone(),
            email: employee.company_email.clone().unwrap_or_default(),
            phone: employee.company_phone_number.clone().unwrap_or_default(),
            avatar: page.avatar().map(|a| a.data_url()),
        },
        can_delete: page.can_delete(session),
    }))
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn company_fields(employee: &Employee) -> Vec<Field> {
    vec![
        Field::new("Company email", text(&employee.company_email)),
        Field::new("Company phone number", text(&employee.company_phone_number)),
        Field::new("Employee status", text(&employee.employee_status)),
        Field::new("Job Title", or_na(employee.job_title())),
        Field::new("Team", or_na(employee.team_name())),
        Field::new("Department", or_na(employee.department_name())),
    ]
}

fn personal_fields(employee: &Employee) -> Vec<Field> {
    vec![
        Field::new("Gender", employee.gender_label()),
        Field::new("First Name", text(&employee.first_name)),
        Field::new("Last Name", text(&employee.last_name)),
        Field::new("Personal Email", text(&employee.personal_email)),
        Field::new("Personal Phone Number", text(&employee.personal_phone_number)),
        Field::new("Current Address", text(&employee.current_address)),
        Field::new("Date of Birth", text(&employee.date_of_birth)),
        Field::new("Place of Birth", text(&employee.birth_place)),
        Field::new("Marital Status", employee.marital_label()),
    ]
}
