use base64::Engine;
use serde::{Deserialize, Serialize};

/// Wrapper for `{ "data": ... }` API responses.
///
/// The backend answers `{"data": null}` (or omits `data`) when there is
/// nothing to show.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// An employee record as returned by `GET /employees/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company_email: Option<String>,
    #[serde(default)]
    pub company_phone_number: Option<String>,
    #[serde(default)]
    pub personal_email: Option<String>,
    #[serde(default)]
    pub personal_phone_number: Option<String>,
    #[serde(default)]
    pub current_address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub birth_place: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub employee_status: Option<String>,
    #[serde(default)]
    pub job_title: Option<JobTitle>,
    #[serde(default)]
    pub team: Option<NamedRef>,
    #[serde(default)]
    pub department: Option<NamedRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobTitle {
    #[serde(default)]
    pub title: Option<String>,
}

/// Team or department reference embedded in an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Visual tone of an employment status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Primary,
    Warning,
    Neutral,
}

impl Employee {
    /// "First Last", trimmed.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_ref().and_then(|j| non_blank(j.title.as_deref()))
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| non_blank(t.name.as_deref()))
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department
            .as_ref()
            .and_then(|d| non_blank(d.name.as_deref()))
    }

    pub fn status_tone(&self) -> StatusTone {
        match self.employee_status.as_deref() {
            Some("OFFICIAL") => StatusTone::Primary,
            Some("PROBATION") => StatusTone::Warning,
            _ => StatusTone::Neutral,
        }
    }

    pub fn gender_label(&self) -> &'static str {
        match self.gender.as_deref() {
            Some("MALE") => "Male",
            Some("FEMALE") => "Female",
            _ => "Other",
        }
    }

    pub fn marital_label(&self) -> &'static str {
        match self.marital_status.as_deref() {
            Some("MARRIED") => "Married",
            _ => "Not married",
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Avatar payload from `GET /employees/profile/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Avatar {
    #[serde(rename = "avatarImage")]
    pub avatar_image: String,
    #[serde(rename = "avatarContentType")]
    pub avatar_content_type: String,
}

impl Avatar {
    /// `data:` URL suitable for an image element.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.avatar_content_type, self.avatar_image
        )
    }

    /// Raw image bytes. Fails when the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(self.avatar_image.trim())
    }
}

/// A single audited change to an employee record.
///
/// Every field tolerates `null` or absence; the backend is not consistent
/// about which ones it fills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub changed_at: Option<String>,
    #[serde(default)]
    pub changed_by: Option<String>,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
    #[serde(default)]
    pub change_type: Option<String>,
}

/// Payload of `GET /attendance/dashboard-summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AttendanceSummary {
    #[serde(rename = "totalEmployees")]
    pub total_employees: u64,
    #[serde(rename = "totalAttendanceToday")]
    pub total_attendance_today: u64,
}
