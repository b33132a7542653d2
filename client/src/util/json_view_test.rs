use serde_json::json;

use super::*;

// =============================================================
// humanize_key
// =============================================================

#[test]
fn humanize_splits_camel_case_and_acronyms() {
    assert_eq!(humanize_key("sampleDTO"), "Sample DTO");
    assert_eq!(humanize_key("lithoRegion"), "Litho Region");
    assert_eq!(humanize_key("id"), "Id");
}

#[test]
fn humanize_handles_separators() {
    assert_eq!(humanize_key("min_age"), "Min Age");
    assert_eq!(humanize_key("igsn-code"), "Igsn Code");
}

// =============================================================
// sections
// =============================================================

#[test]
fn sections_skip_empty_values() {
    let record = json!({
        "name": "Granite",
        "note": "  ",
        "missing": null,
        "tags": [],
        "extra": {},
    });
    assert_eq!(
        sections(&record),
        vec![JsonEntry::Field { label: "Name".to_owned(), value: "Granite".to_owned() }]
    );
}

#[test]
fn nested_objects_become_sections() {
    let record = json!({ "locationDTO": { "lat": -42.5, "lon": 146.0, "elevation": null } });
    let out = sections(&record);
    assert_eq!(out.len(), 1);
    let JsonEntry::Section { label, entries } = &out[0] else {
        panic!("expected a section");
    };
    assert_eq!(label, "Location DTO");
    assert_eq!(entries.len(), 2);
}

#[test]
fn scalar_arrays_are_joined_and_object_arrays_numbered() {
    let record = json!({
        "authorities": ["ROLE_USER", "ROLE_ADMIN"],
        "ages": [{ "value": 10 }, { "value": null }, { "value": 30 }],
    });
    let out = sections(&record);
    assert!(out.contains(&JsonEntry::Field {
        label: "Authorities".to_owned(),
        value: "ROLE_USER, ROLE_ADMIN".to_owned()
    }));
    let ages = out
        .iter()
        .find_map(|e| match e {
            JsonEntry::Section { label, entries } if label == "Ages" => Some(entries),
            _ => None,
        })
        .expect("ages section");
    let labels: Vec<&str> = ages
        .iter()
        .map(|e| match e {
            JsonEntry::Section { label, .. } | JsonEntry::Field { label, .. } => label.as_str(),
        })
        .collect();
    assert_eq!(labels, vec!["Ages 1", "Ages 3"]);
}

#[test]
fn booleans_render_as_yes_no() {
    let out = sections(&json!({ "public": true, "archived": false }));
    assert!(out.contains(&JsonEntry::Field { label: "Public".to_owned(), value: "Yes".to_owned() }));
    assert!(out.contains(&JsonEntry::Field { label: "Archived".to_owned(), value: "No".to_owned() }));
}

#[test]
fn scalar_record_yields_single_field() {
    assert_eq!(sections(&json!(7)), vec![JsonEntry::Field { label: "Value".to_owned(), value: "7".to_owned() }]);
    assert!(sections(&json!(null)).is_empty());
}

#[test]
fn pretty_indents() {
    assert_eq!(pretty(&json!({ "a": 1 })), "{\n  \"a\": 1\n}");
}
