use hr_client::AttendanceSummary;

use crate::controller::{LoadStatus, Resource};

pub const LOADING_MESSAGE: &str = "Loading attendance data...";
pub const EMPTY_MESSAGE: &str = "No attendance data available";
pub const CAPTION: &str = "employees checked in today";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceView {
    Loading,
    Error(String),
    Empty,
    Ready { present: u64, total: u64 },
}

impl AttendanceView {
    /// Headline text, e.g. "12 / 40".
    pub fn headline(&self) -> String {
        match self {
            AttendanceView::Loading => LOADING_MESSAGE.to_string(),
            AttendanceView::Error(message) => message.clone(),
            AttendanceView::Empty => EMPTY_MESSAGE.to_string(),
            AttendanceView::Ready { present, total } => format!("{} / {}", present, total),
        }
    }
}

pub fn attendance_view(resource: &Resource<AttendanceSummary>) -> AttendanceView {
    match (resource.status, resource.payload.as_ref()) {
        (LoadStatus::Idle | LoadStatus::Loading, _) => AttendanceView::Loading,
        (LoadStatus::Error, _) => AttendanceView::Error(resource.error_message().unwrap_or_default()),
        (LoadStatus::Loaded, Some(summary)) => AttendanceView::Ready {
            present: summary.total_attendance_today,
            total: summary.total_employees,
        },
        (LoadStatus::Loaded, None) => AttendanceView::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{label, LoadError};

    #[test]
    fn test_attendance_states() {
        let mut resource = Resource::<AttendanceSummary>::default();
        assert_eq!(attendance_view(&resource), AttendanceView::Loading);

        resource.status = LoadStatus::Loaded;
        assert_eq!(attendance_view(&resource), AttendanceView::Empty);

        resource.payload = Some(AttendanceSummary {
            total_employees: 40,
            total_attendance_today: 12,
        });
        let view = attendance_view(&resource);
        assert_eq!(view.headline(), "12 / 40");

        resource.status = LoadStatus::Error;
        resource.error = Some(LoadError::LoadFailed(label::ATTENDANCE));
        assert_eq!(
            attendance_view(&resource).headline(),
            "Failed to load attendance data. Please try again."
        );
    }
}
