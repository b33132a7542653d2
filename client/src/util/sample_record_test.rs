use serde_json::json;

use super::*;

#[test]
fn row_id_prefers_sample_dto() {
    let row = json!({ "id": 9, "sampleDTO": { "id": 42 } });
    assert_eq!(row_id(&row, 0), "42");
}

#[test]
fn row_id_falls_back_to_top_level_then_index() {
    assert_eq!(row_id(&json!({ "id": "abc" }), 3), "abc");
    assert_eq!(row_id(&json!({ "sampleDTO": {} }), 3), "3");
    assert_eq!(row_id(&json!({ "id": null }), 5), "5");
}

#[test]
fn row_ids_keeps_order() {
    let rows = vec![json!({ "id": 1 }), json!({}), json!({ "sampleDTO": { "id": "x" } })];
    assert_eq!(row_ids(&rows), vec!["1".to_owned(), "1".to_owned(), "x".to_owned()]);
}

#[test]
fn row_name_falls_back_to_short_name() {
    assert_eq!(row_name(&json!({ "sampleDTO": { "name": "Granite A" } })), "Granite A");
    assert_eq!(row_name(&json!({ "shortName": "GA" })), "GA");
    assert_eq!(row_name(&json!({})), "");
}

#[test]
fn coordinates_format_to_five_decimals() {
    let row = json!({ "locationDTO": { "lat": -42.123_456_78, "lon": 146 } });
    assert_eq!(format_coord(row_lat(&row)), "-42.12346");
    assert_eq!(format_coord(row_lon(&row)), "146.00000");
    assert_eq!(format_coord(row_lat(&json!({}))), "");
}
