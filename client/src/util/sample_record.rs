//! Field access for loosely-typed sample records.
//!
//! Rows come back as `{ sampleDTO: {...}, locationDTO: {...}, ... }`. The
//! table reads identity, name and coordinates with fallbacks because older
//! endpoints flatten some of those fields onto the row itself.

#[cfg(test)]
#[path = "sample_record_test.rs"]
mod sample_record_test;

use serde_json::Value;

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Row identity: `sampleDTO.id`, then `id`, then the row index.
#[must_use]
pub fn row_id(row: &Value, index: usize) -> String {
    row.pointer("/sampleDTO/id")
        .and_then(scalar_to_string)
        .or_else(|| row.get("id").and_then(scalar_to_string))
        .unwrap_or_else(|| index.to_string())
}

/// Ids for a page of rows, in order.
#[must_use]
pub fn row_ids(rows: &[Value]) -> Vec<String> {
    rows.iter().enumerate().map(|(i, row)| row_id(row, i)).collect()
}

/// Display name: `sampleDTO.name`, then `shortName`, else empty.
#[must_use]
pub fn row_name(row: &Value) -> String {
    row.pointer("/sampleDTO/name")
        .and_then(Value::as_str)
        .or_else(|| row.get("shortName").and_then(Value::as_str))
        .unwrap_or_default()
        .to_owned()
}

#[must_use]
pub fn row_lat(row: &Value) -> Option<f64> {
    row.pointer("/locationDTO/lat").and_then(Value::as_f64)
}

#[must_use]
pub fn row_lon(row: &Value) -> Option<f64> {
    row.pointer("/locationDTO/lon").and_then(Value::as_f64)
}

/// Coordinates render with five decimals; missing values render empty.
#[must_use]
pub fn format_coord(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.5}")).unwrap_or_default()
}
