//! Turn an arbitrary JSON record into labelled sections for the detail view.
//!
//! Nulls, empty strings, empty arrays and empty objects are dropped so the
//! view only shows populated fields. Objects become nested sections; arrays of
//! scalars are joined; arrays of objects become numbered sub-sections.

#[cfg(test)]
#[path = "json_view_test.rs"]
mod json_view_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub enum JsonEntry {
    Field { label: String, value: String },
    Section { label: String, entries: Vec<JsonEntry> },
}

/// `sampleDTO` → `Sample DTO`, `lithoRegion` → `Litho Region`, `min_age` → `Min Age`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c == '_' || c == '-' {
            if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
            prev = Some(' ');
            continue;
        }
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push(' ');
        }
        if out.is_empty() || out.ends_with(' ') {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(true) => Some("Yes".to_owned()),
        Value::Bool(false) => Some("No".to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn entry(label: String, value: &Value) -> Option<JsonEntry> {
    match value {
        Value::Object(map) => {
            let entries = object_entries(map);
            (!entries.is_empty()).then_some(JsonEntry::Section { label, entries })
        }
        Value::Array(items) => {
            if items.iter().all(|v| !v.is_object() && !v.is_array()) {
                let joined = items.iter().filter_map(scalar_text).collect::<Vec<_>>().join(", ");
                return (!joined.is_empty()).then_some(JsonEntry::Field { label, value: joined });
            }
            let entries: Vec<JsonEntry> = items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| entry(format!("{label} {}", i + 1), item))
                .collect();
            (!entries.is_empty()).then_some(JsonEntry::Section { label, entries })
        }
        scalar => scalar_text(scalar).map(|value| JsonEntry::Field { label, value }),
    }
}

fn object_entries(map: &serde_json::Map<String, Value>) -> Vec<JsonEntry> {
    map.iter().filter_map(|(k, v)| entry(humanize_key(k), v)).collect()
}

/// Top-level entries for a record. Non-object records yield a single field.
#[must_use]
pub fn sections(record: &Value) -> Vec<JsonEntry> {
    match record {
        Value::Object(map) => object_entries(map),
        other => entry("Value".to_owned(), other).into_iter().collect(),
    }
}

/// Indented JSON for the raw view.
#[must_use]
pub fn pretty(record: &Value) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string())
}
