#![allow(clippy::float_cmp)]

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn camera(width: f64, height: f64, center: LngLat, zoom: f64) -> Camera {
    let mut cam = Camera { viewport_width: width, viewport_height: height, ..Camera::default() };
    cam.set_view(center, zoom);
    cam
}

// =============================================================
// Projection
// =============================================================

#[test]
fn project_null_island_is_square_center() {
    let (x, y) = project(LngLat::new(0.0, 0.0));
    assert!(approx(x, 0.5));
    assert!(approx(y, 0.5));
}

#[test]
fn project_north_west_corner_is_origin() {
    let (x, y) = project(LngLat::new(-180.0, MAX_LATITUDE));
    assert!(approx(x, 0.0));
    assert!(approx(y, 0.0));
}

#[test]
fn project_clamps_polar_latitudes() {
    let (_, y_pole) = project(LngLat::new(0.0, 90.0));
    let (_, y_max) = project(LngLat::new(0.0, MAX_LATITUDE));
    assert!(approx(y_pole, y_max));
}

#[test]
fn unproject_recovers_mid_latitude_position() {
    let (x, y) = project(LngLat::new(146.8, -41.4));
    let pos = unproject(x, y);
    assert!(approx(pos.lon, 146.8));
    assert!(approx(pos.lat, -41.4));
}

// =============================================================
// Camera defaults
// =============================================================

#[test]
fn default_camera_centers_on_initial_view() {
    let cam = Camera::default();
    let center = cam.center();
    assert!(approx(center.lon, DEFAULT_CENTER_LON));
    assert!(approx(center.lat, DEFAULT_CENTER_LAT));
    assert_eq!(cam.zoom, DEFAULT_ZOOM);
}

#[test]
fn world_size_doubles_per_zoom_level() {
    let mut cam = Camera::default();
    cam.zoom = 0.0;
    assert_eq!(cam.world_size(), TILE_SIZE);
    cam.zoom = 3.0;
    assert_eq!(cam.world_size(), TILE_SIZE * 8.0);
}

// =============================================================
// Conversions
// =============================================================

#[test]
fn center_projects_to_viewport_middle() {
    let cam = camera(800.0, 600.0, LngLat::new(10.0, 45.0), 5.0);
    let p = cam.lnglat_to_screen(LngLat::new(10.0, 45.0));
    assert!(approx(p.x, 400.0));
    assert!(approx(p.y, 300.0));
}

#[test]
fn screen_to_lnglat_inverts_lnglat_to_screen() {
    let cam = camera(800.0, 600.0, LngLat::new(10.0, 45.0), 5.0);
    let pos = LngLat::new(12.5, 43.25);
    let back = cam.screen_to_lnglat(cam.lnglat_to_screen(pos));
    assert!(approx(back.lon, pos.lon));
    assert!(approx(back.lat, pos.lat));
}

#[test]
fn east_is_right_and_north_is_up() {
    let cam = camera(800.0, 600.0, LngLat::new(0.0, 0.0), 4.0);
    let east = cam.lnglat_to_screen(LngLat::new(5.0, 0.0));
    let north = cam.lnglat_to_screen(LngLat::new(0.0, 5.0));
    assert!(east.x > 400.0);
    assert!(north.y < 300.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_at_zoom_zero_cover_the_world() {
    let cam = camera(TILE_SIZE, TILE_SIZE, LngLat::new(0.0, 0.0), 0.0);
    let b = cam.bounds();
    assert!(approx(b.min_lon, -180.0));
    assert!(approx(b.max_lon, 180.0));
    assert!(approx(b.min_lat, -MAX_LATITUDE));
    assert!(approx(b.max_lat, MAX_LATITUDE));
}

#[test]
fn bounds_are_clamped_when_viewport_exceeds_world() {
    let cam = camera(2000.0, 2000.0, LngLat::new(0.0, 0.0), 0.0);
    let b = cam.bounds();
    assert_eq!(b.min_lon, -180.0);
    assert_eq!(b.max_lon, 180.0);
    assert_eq!(b.max_lat, MAX_LATITUDE);
}

#[test]
fn bounds_contain_the_center() {
    let cam = camera(640.0, 480.0, LngLat::new(-70.0, -33.0), 8.0);
    let b = cam.bounds();
    assert!(b.contains(LngLat::new(-70.0, -33.0)));
    assert!(b.min_lon < b.max_lon);
    assert!(b.min_lat < b.max_lat);
}

#[test]
fn bounding_box_contains_is_edge_inclusive() {
    let b = BoundingBox { min_lon: 0.0, min_lat: 0.0, max_lon: 10.0, max_lat: 10.0 };
    assert!(b.contains(LngLat::new(0.0, 10.0)));
    assert!(!b.contains(LngLat::new(10.5, 5.0)));
}

// =============================================================
// Pan / zoom
// =============================================================

#[test]
fn dragging_right_moves_center_west() {
    let mut cam = camera(800.0, 600.0, LngLat::new(20.0, 0.0), 4.0);
    cam.pan_by(100.0, 0.0);
    assert!(cam.center().lon < 20.0);
}

#[test]
fn pan_is_clamped_to_world_edges() {
    let mut cam = camera(800.0, 600.0, LngLat::new(0.0, 0.0), 1.0);
    cam.pan_by(1.0e9, 1.0e9);
    assert_eq!(cam.center_x, 0.0);
    assert_eq!(cam.center_y, 0.0);
}

#[test]
fn zoom_at_keeps_anchor_fixed() {
    let mut cam = camera(800.0, 600.0, LngLat::new(0.0, 30.0), 3.0);
    let anchor = Point::new(620.0, 140.0);
    let before = cam.screen_to_lnglat(anchor);
    cam.zoom_at(anchor, 5.5);
    let after = cam.screen_to_lnglat(anchor);
    assert!(approx(before.lon, after.lon));
    assert!(approx(before.lat, after.lat));
    assert_eq!(cam.zoom, 5.5);
}

#[test]
fn zoom_is_clamped() {
    let mut cam = camera(800.0, 600.0, LngLat::new(0.0, 0.0), 3.0);
    cam.zoom_at(Point::new(400.0, 300.0), 42.0);
    assert_eq!(cam.zoom, MAX_ZOOM);
    cam.set_view(LngLat::new(0.0, 0.0), -3.0);
    assert_eq!(cam.zoom, MIN_ZOOM);
}

#[test]
fn point_distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}
