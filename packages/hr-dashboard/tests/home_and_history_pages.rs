use hr_client::mock::Endpoint;
use hr_client::{AttendanceSummary, MockHrApi, Session};
use hr_dashboard::pages::{EmployeeHistoryPage, HomePage};
use hr_dashboard::render::{attendance_view, history_view, AttendanceView, HistoryView};
use hr_dashboard::LazyState;
use serde_json::json;

#[tokio::test]
async fn test_home_shows_attendance() {
    let api = MockHrApi::new().with_attendance(AttendanceSummary {
        total_employees: 40,
        total_attendance_today: 31,
    });

    let mut page = HomePage::new();
    assert_eq!(attendance_view(page.attendance()), AttendanceView::Loading);

    page.mount(&api, &Session::with_token("token")).await;
    assert_eq!(
        attendance_view(page.attendance()),
        AttendanceView::Ready {
            present: 31,
            total: 40
        }
    );
}

#[tokio::test]
async fn test_home_attendance_failure() {
    let api = MockHrApi::new().with_attendance_status(503);

    let mut page = HomePage::new();
    page.mount(&api, &Session::with_token("token")).await;

    assert_eq!(
        attendance_view(page.attendance()),
        AttendanceView::Error("Failed to load attendance data. Please try again.".into())
    );
}

#[tokio::test]
async fn test_home_attendance_without_data_is_empty() {
    let api = MockHrApi::new().with_attendance_empty();

    let mut page = HomePage::new();
    page.mount(&api, &Session::with_token("token")).await;

    let view = attendance_view(page.attendance());
    assert_eq!(view, AttendanceView::Empty);
    assert_eq!(view.headline(), "No attendance data available");
}

#[tokio::test]
async fn test_history_page_loads_on_mount_once() {
    let api = MockHrApi::new().with_history_body(
        "7",
        json!({ "data": [{ "changedAt": "not a date", "changedBy": "hr" }] }),
    );
    let session = Session::with_token("token");

    let mut page = EmployeeHistoryPage::new("7");
    page.mount(&api, &session).await;
    page.mount(&api, &session).await;

    assert_eq!(api.endpoint_calls(Endpoint::History), 1);
    let HistoryView::Table(rows) = history_view(page.history()) else {
        panic!("expected table");
    };
    assert_eq!(rows[0].date, "not a date");
    assert_eq!(rows[0].changed_by, "hr");
}

#[tokio::test]
async fn test_history_page_navigation_resets() {
    let api = MockHrApi::new()
        .with_history_body("7", json!([]))
        .with_history_body("8", json!([]));
    let session = Session::with_token("token");

    let mut page = EmployeeHistoryPage::new("7");
    page.mount(&api, &session).await;
    assert_eq!(page.history(), &LazyState::Loaded(vec![]));

    page.show("8");
    assert_eq!(page.history(), &LazyState::NotLoaded);
    page.mount(&api, &session).await;

    assert_eq!(api.endpoint_calls(Endpoint::History), 2);
    assert_eq!(api.calls()[1].id.as_deref(), Some("8"));
}
