use serde_json::json;

use super::*;

fn collection(value: serde_json::Value) -> FeatureCollection {
    serde_json::from_value(value).expect("valid feature collection")
}

fn point_feature(properties: serde_json::Value, lon: f64, lat: f64) -> serde_json::Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [lon, lat] },
        "properties": properties,
    })
}

// =============================================================
// SampleFeature::from_feature
// =============================================================

#[test]
fn loads_point_features_with_property_id() {
    let fc = collection(json!({
        "type": "FeatureCollection",
        "features": [point_feature(json!({ "id": "s-1", "name": "Granite" }), 146.5, -42.0)],
    }));
    let mut store = FeatureStore::new();
    store.load(&fc);
    assert_eq!(store.len(), 1);
    let f = &store.features()[0];
    assert_eq!(f.id, "s-1");
    assert_eq!(f.label.as_deref(), Some("Granite"));
    assert_eq!(f.position, LngLat::new(146.5, -42.0));
}

#[test]
fn numeric_property_id_is_stringified() {
    let fc = collection(json!({
        "type": "FeatureCollection",
        "features": [point_feature(json!({ "id": 1234 }), 0.0, 0.0)],
    }));
    let mut store = FeatureStore::new();
    store.load(&fc);
    assert_eq!(store.features()[0].id, "1234");
}

#[test]
fn falls_back_to_sample_id_then_feature_id() {
    let fc = collection(json!({
        "type": "FeatureCollection",
        "features": [
            point_feature(json!({ "sampleId": "by-sample-id" }), 1.0, 1.0),
            {
                "type": "Feature",
                "id": "by-feature-id",
                "geometry": { "type": "Point", "coordinates": [2.0, 2.0] },
                "properties": {},
            },
        ],
    }));
    let mut store = FeatureStore::new();
    store.load(&fc);
    let ids: Vec<&str> = store.features().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["by-sample-id", "by-feature-id"]);
}

#[test]
fn skips_features_without_id_or_point_geometry() {
    let fc = collection(json!({
        "type": "FeatureCollection",
        "features": [
            point_feature(json!({}), 1.0, 1.0),
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] },
                "properties": { "id": "line" },
            },
            { "type": "Feature", "geometry": null, "properties": { "id": "nowhere" } },
        ],
    }));
    let mut store = FeatureStore::new();
    store.load(&fc);
    assert!(store.is_empty());
}

#[test]
fn multipoint_uses_first_position() {
    let fc = collection(json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "MultiPoint", "coordinates": [[5.0, 6.0], [7.0, 8.0]] },
            "properties": { "id": "mp" },
        }],
    }));
    let mut store = FeatureStore::new();
    store.load(&fc);
    assert_eq!(store.get("mp").map(|f| f.position), Some(LngLat::new(5.0, 6.0)));
}

// =============================================================
// FeatureStore
// =============================================================

#[test]
fn load_replaces_previous_contents() {
    let mut store = FeatureStore::new();
    store.load(&collection(json!({
        "type": "FeatureCollection",
        "features": [point_feature(json!({ "id": "old" }), 0.0, 0.0)],
    })));
    store.load(&collection(json!({
        "type": "FeatureCollection",
        "features": [point_feature(json!({ "id": "new" }), 0.0, 0.0)],
    })));
    assert!(store.get("old").is_none());
    assert!(store.get("new").is_some());
}

#[test]
fn clear_empties_store() {
    let mut store = FeatureStore::new();
    store.load(&collection(json!({
        "type": "FeatureCollection",
        "features": [point_feature(json!({ "id": "a" }), 0.0, 0.0)],
    })));
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}
