use hr_client::HistoryEntry;

use super::{format_date_time, or_na, NOT_AVAILABLE};
use crate::lazy::LazyState;

pub const LOADING_MESSAGE: &str = "Loading employee history...";
pub const EMPTY_MESSAGE: &str = "No history recorded yet.";

pub const HEADERS: [&str; 5] = ["Date", "Changed By", "Field", "Old → New", "Type"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    Loading,
    Error(String),
    Empty,
    Table(Vec<HistoryRow>),
}

impl HistoryView {
    /// Status line for the non-table states.
    pub fn message(&self) -> Option<&str> {
        match self {
            HistoryView::Loading => Some(LOADING_MESSAGE),
            HistoryView::Error(message) => Some(message.as_str()),
            HistoryView::Empty => Some(EMPTY_MESSAGE),
            HistoryView::Table(_) => None,
        }
    }
}

/// One rendered change. `old_value` is shown struck through above `new_value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// `(changedAt, index)`; records carry no id of their own.
    pub key: (String, usize),
    pub date: String,
    pub changed_by: String,
    pub field: String,
    pub old_value: String,
    pub new_value: String,
    pub change_type: String,
}

impl HistoryRow {
    fn from_entry(index: usize, entry: &HistoryEntry) -> Self {
        let changed_at = entry.changed_at.clone().unwrap_or_default();
        Self {
            date: format_date_time(&changed_at),
            key: (changed_at, index),
            changed_by: or_na(entry.changed_by.as_deref()),
            field: or_na(entry.field_name.as_deref()),
            old_value: entry
                .old_value
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            new_value: entry
                .new_value
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            change_type: entry.change_type.clone().unwrap_or_default(),
        }
    }
}

/// Server order is kept; rows are never re-sorted.
pub fn history_view(state: &LazyState<Vec<HistoryEntry>>) -> HistoryView {
    match state {
        // the tab fetches as soon as it is shown
        LazyState::NotLoaded | LazyState::Loading => HistoryView::Loading,
        LazyState::Failed(error) => HistoryView::Error(error.message()),
        LazyState::Loaded(entries) if entries.is_empty() => HistoryView::Empty,
        LazyState::Loaded(entries) => HistoryView::Table(
            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| HistoryRow::from_entry(index, entry))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{label, LoadError};

    #[test]
    fn test_each_state_renders_distinctly() {
        assert_eq!(history_view(&LazyState::Loading), HistoryView::Loading);
        assert_eq!(history_view(&LazyState::Loaded(vec![])), HistoryView::Empty);
        assert_eq!(
            history_view(&LazyState::Failed(LoadError::Forbidden(label::HISTORY))),
            HistoryView::Error("You don't have permission to view employee history.".into())
        );
        assert_eq!(
            HistoryView::Empty.message(),
            Some("No history recorded yet.")
        );
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let view = history_view(&LazyState::Loaded(vec![HistoryEntry {
            changed_at: None,
            changed_by: Some("".into()),
            field_name: None,
            old_value: None,
            new_value: Some("x".into()),
            change_type: None,
        }]));

        let HistoryView::Table(rows) = view else {
            panic!("expected table");
        };
        let row = &rows[0];
        assert_eq!(row.key, (String::new(), 0));
        assert_eq!(row.date, "N/A");
        assert_eq!(row.changed_by, "N/A");
        assert_eq!(row.field, "N/A");
        assert_eq!(row.old_value, "N/A");
        assert_eq!(row.new_value, "x");
        assert_eq!(row.change_type, "");
    }

    #[test]
    fn test_whitespace_author_is_kept() {
        let view = history_view(&LazyState::Loaded(vec![HistoryEntry {
            changed_by: Some("  ".into()),
            field_name: Some("jobTitle".into()),
            ..Default::default()
        }]));

        let HistoryView::Table(rows) = view else {
            panic!("expected table");
        };
        assert_eq!(rows[0].changed_by, "  ");
        assert_eq!(rows[0].field, "jobTitle");
    }

    #[test]
    fn test_duplicate_timestamps_get_distinct_keys() {
        let entry = HistoryEntry {
            changed_at: Some("2024-01-01T00:00:00Z".into()),
            ..Default::default()
        };
        let HistoryView::Table(rows) = history_view(&LazyState::Loaded(vec![entry.clone(), entry]))
        else {
            panic!("expected table");
        };
        assert_ne!(rows[0].key, rows[1].key);
    }
}
