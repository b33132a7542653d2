//! Web-Mercator camera: geographic ↔ screen conversions, pan and zoom.
//!
//! Positions inside the Mercator square are kept in normalized units where
//! `(0, 0)` is the north-west corner (180°W, 85.05°N) and `(1, 1)` the
//! south-east corner. At zoom `z` the square spans `TILE_SIZE * 2^z` pixels.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_ZOOM, MAX_LATITUDE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};

/// A point in screen space (CSS pixels, origin at the canvas top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lon: f64,
    pub lat: f64,
}

impl LngLat {
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Geographic rectangle reported to the host when the visible area changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Whether `pos` lies inside the box (edges inclusive).
    #[must_use]
    pub fn contains(&self, pos: LngLat) -> bool {
        pos.lon >= self.min_lon && pos.lon <= self.max_lon && pos.lat >= self.min_lat && pos.lat <= self.max_lat
    }
}

/// Project a geographic position into the normalized Mercator square.
#[must_use]
pub fn project(pos: LngLat) -> (f64, f64) {
    let lat = pos.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = (pos.lon + 180.0) / 360.0;
    let sin_lat = lat.to_radians().sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);
    (x, y)
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(x: f64, y: f64) -> LngLat {
    let lon = x * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees();
    LngLat { lon, lat }
}

/// Camera state for the slippy map.
///
/// `center_x` / `center_y` are normalized Mercator coordinates.
/// `zoom` is a continuous zoom level clamped to `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        let (center_x, center_y) = project(LngLat::new(DEFAULT_CENTER_LON, DEFAULT_CENTER_LAT));
        Self { center_x, center_y, zoom: DEFAULT_ZOOM, viewport_width: 0.0, viewport_height: 0.0 }
    }
}

impl Camera {
    /// Size of the whole Mercator square in pixels at the current zoom.
    #[must_use]
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Geographic position of the viewport center.
    #[must_use]
    pub fn center(&self) -> LngLat {
        unproject(self.center_x, self.center_y)
    }

    /// Center the camera on `center` at `zoom`.
    pub fn set_view(&mut self, center: LngLat, zoom: f64) {
        let (x, y) = project(center);
        self.center_x = x;
        self.center_y = y;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp_center();
    }

    /// Convert a geographic position to screen coordinates.
    #[must_use]
    pub fn lnglat_to_screen(&self, pos: LngLat) -> Point {
        let (x, y) = project(pos);
        self.mercator_to_screen(x, y)
    }

    /// Convert a screen point to a geographic position.
    #[must_use]
    pub fn screen_to_lnglat(&self, screen: Point) -> LngLat {
        let (x, y) = self.screen_to_mercator(screen);
        unproject(x, y)
    }

    /// Convert normalized Mercator coordinates to screen coordinates.
    #[must_use]
    pub fn mercator_to_screen(&self, x: f64, y: f64) -> Point {
        let size = self.world_size();
        Point {
            x: (x - self.center_x) * size + self.viewport_width * 0.5,
            y: (y - self.center_y) * size + self.viewport_height * 0.5,
        }
    }

    /// Convert a screen point to normalized Mercator coordinates.
    #[must_use]
    pub fn screen_to_mercator(&self, screen: Point) -> (f64, f64) {
        let size = self.world_size();
        (
            self.center_x + (screen.x - self.viewport_width * 0.5) / size,
            self.center_y + (screen.y - self.viewport_height * 0.5) / size,
        )
    }

    /// Geographic extent of the visible viewport, clamped to valid lon/lat.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        let north_west = self.screen_to_lnglat(Point::new(0.0, 0.0));
        let south_east = self.screen_to_lnglat(Point::new(self.viewport_width, self.viewport_height));
        BoundingBox {
            min_lon: north_west.lon.clamp(-180.0, 180.0),
            min_lat: south_east.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            max_lon: south_east.lon.clamp(-180.0, 180.0),
            max_lat: north_west.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
        }
    }

    /// Move the map content by a screen-space delta (drag direction).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let size = self.world_size();
        self.center_x -= dx / size;
        self.center_y -= dy / size;
        self.clamp_center();
    }

    /// Change zoom while keeping the geographic point under `anchor` fixed.
    pub fn zoom_at(&mut self, anchor: Point, zoom: f64) {
        let (ax, ay) = self.screen_to_mercator(anchor);
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let size = self.world_size();
        self.center_x = ax - (anchor.x - self.viewport_width * 0.5) / size;
        self.center_y = ay - (anchor.y - self.viewport_height * 0.5) / size;
        self.clamp_center();
    }

    fn clamp_center(&mut self) {
        self.center_x = self.center_x.clamp(0.0, 1.0);
        self.center_y = self.center_y.clamp(0.0, 1.0);
    }
}
