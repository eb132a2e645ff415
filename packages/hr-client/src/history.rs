//! Normalization of the employee history response.
//!
//! The history endpoint has been observed to answer with three shapes:
//!
//! - `{ "data": { "items": [...] } }`
//! - `{ "data": [...] }`
//! - `[...]`
//!
//! None of them is treated as canonical. The first present candidate in that
//! order is taken; if it is not an array the result is empty.

use serde_json::Value;
use tracing::warn;

use crate::types::HistoryEntry;

/// Extract history records from any accepted response shape.
pub fn normalize_history(body: Value) -> Vec<HistoryEntry> {
    let records = match select_records(body) {
        Value::Array(records) => records,
        _ => return Vec::new(),
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed history record");
                None
            }
        })
        .collect()
}

fn select_records(mut body: Value) -> Value {
    if let Some(items) = body
        .get_mut("data")
        .and_then(|data| data.get_mut("items"))
        .filter(|items| is_present(items))
    {
        return items.take();
    }

    if let Some(data) = body.get_mut("data").filter(|data| is_present(data)) {
        return data.take();
    }

    body
}

/// Null, `false`, zero and the empty string count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
