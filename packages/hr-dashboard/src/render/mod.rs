//! Presentation.
//!
//! The `*_view` builders are pure functions from page state to a view model:
//! no IO, no clock except the local timezone used for dates. The
//! [`terminal`] module paints view models as text.

pub mod attendance;
pub mod history;
pub mod personal;
pub mod profile;
pub mod terminal;

pub use attendance::{attendance_view, AttendanceView};
pub use history::{history_view, HistoryRow, HistoryView};
pub use personal::{personal_view, PersonalCard, PersonalView, TabContent};
pub use profile::{profile_view, ProfileView};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const NOT_AVAILABLE: &str = "N/A";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp in local time. Unparseable input is shown as-is.
pub fn format_date_time(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    // no offset means local time
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        if let Some(local) = Local.from_local_datetime(&naive).earliest() {
            return local.format(DISPLAY_FORMAT).to_string();
        }
    }

    // a bare date is midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Utc
                .from_utc_datetime(&midnight)
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string();
        }
    }

    value.to_string()
}

/// `value`, or "N/A" when missing or empty. Whitespace is shown as-is.
pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339_in_local_time() {
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
        assert_eq!(format_date_time("2024-01-01T00:00:00Z"), expected);
    }

    #[test]
    fn test_format_naive_as_local() {
        assert_eq!(
            format_date_time("2024-03-05T14:30:00"),
            "2024-03-05 14:30:00"
        );
    }

    #[test]
    fn test_format_date_only_as_utc_midnight() {
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
        assert_eq!(format_date_time("2024-01-01"), expected);
    }

    #[test]
    fn test_format_fallbacks() {
        assert_eq!(format_date_time(""), "N/A");
        assert_eq!(format_date_time("yesterday-ish"), "yesterday-ish");
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some("admin")), "admin");
        assert_eq!(or_na(Some("  ")), "  ");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }
}
