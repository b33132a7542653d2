use serde_json::json;

use super::*;
use crate::camera::LngLat;

fn store(points: &[(&str, f64, f64)]) -> FeatureStore {
    let features: Vec<serde_json::Value> = points
        .iter()
        .map(|(id, lon, lat)| {
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [lon, lat] },
                "properties": { "id": id },
            })
        })
        .collect();
    let fc = serde_json::from_value(json!({ "type": "FeatureCollection", "features": features }))
        .expect("valid feature collection");
    let mut store = FeatureStore::new();
    store.load(&fc);
    store
}

fn camera() -> Camera {
    let mut cam = Camera { viewport_width: 800.0, viewport_height: 600.0, ..Camera::default() };
    cam.set_view(LngLat::new(0.0, 0.0), 4.0);
    cam
}

// =============================================================
// ScreenRect
// =============================================================

#[test]
fn rect_from_corners_normalizes_any_drag_direction() {
    let r = ScreenRect::from_corners(Point::new(50.0, 10.0), Point::new(20.0, 40.0));
    assert_eq!(r.min, Point::new(20.0, 10.0));
    assert_eq!(r.max, Point::new(50.0, 40.0));
    assert!((r.width() - 30.0).abs() < f64::EPSILON);
    assert!((r.height() - 30.0).abs() < f64::EPSILON);
}

#[test]
fn rect_contains_edges() {
    let r = ScreenRect::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert!(r.contains(Point::new(10.0, 0.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_test_finds_point_under_cursor() {
    let doc = store(&[("a", 0.0, 0.0), ("b", 10.0, 10.0)]);
    let cam = camera();
    let at_a = cam.lnglat_to_screen(LngLat::new(0.0, 0.0));
    assert_eq!(hit_test(Point::new(at_a.x + 3.0, at_a.y), &doc, &cam), Some("a".to_owned()));
}

#[test]
fn hit_test_misses_outside_radius() {
    let doc = store(&[("a", 0.0, 0.0)]);
    let cam = camera();
    let at_a = cam.lnglat_to_screen(LngLat::new(0.0, 0.0));
    assert_eq!(hit_test(Point::new(at_a.x + 20.0, at_a.y), &doc, &cam), None);
}

#[test]
fn hit_test_prefers_nearest_point() {
    let cam = camera();
    let doc = store(&[("far", 0.0, 0.0), ("near", 0.1, 0.0)]);
    let at_near = cam.lnglat_to_screen(LngLat::new(0.1, 0.0));
    assert_eq!(hit_test(at_near, &doc, &cam), Some("near".to_owned()));
}

#[test]
fn hit_test_on_empty_store_is_none() {
    assert_eq!(hit_test(Point::new(400.0, 300.0), &FeatureStore::new(), &camera()), None);
}

// =============================================================
// features_in_rect
// =============================================================

#[test]
fn features_in_rect_collects_enclosed_points() {
    let cam = camera();
    let doc = store(&[("in-1", 1.0, 1.0), ("in-2", -1.0, -1.0), ("out", 60.0, 40.0)]);
    let rect = ScreenRect::from_corners(Point::new(300.0, 200.0), Point::new(500.0, 400.0));
    assert_eq!(features_in_rect(rect, &doc, &cam), vec!["in-1".to_owned(), "in-2".to_owned()]);
}

#[test]
fn features_in_rect_reports_duplicate_ids_once() {
    let cam = camera();
    let doc = store(&[("dup", 1.0, 1.0), ("dup", 1.5, 1.5)]);
    let rect = ScreenRect::from_corners(Point::new(0.0, 0.0), Point::new(800.0, 600.0));
    assert_eq!(features_in_rect(rect, &doc, &cam), vec!["dup".to_owned()]);
}

#[test]
fn features_in_rect_keeps_first_seen_order_across_duplicates() {
    let cam = camera();
    let doc = store(&[("b", 1.0, 1.0), ("a", 2.0, 2.0), ("b", 1.5, 1.5), ("c", -1.0, -1.0), ("a", 0.5, 0.5)]);
    let rect = ScreenRect::from_corners(Point::new(0.0, 0.0), Point::new(800.0, 600.0));
    assert_eq!(features_in_rect(rect, &doc, &cam), vec!["b".to_owned(), "a".to_owned(), "c".to_owned()]);
}
