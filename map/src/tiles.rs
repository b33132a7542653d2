//! XYZ raster tile coverage for the current camera.
//!
//! Tiles are addressed the OpenStreetMap way: zoom `z` splits the Mercator
//! square into `2^z × 2^z` tiles, `x` growing east and `y` growing south.
//! Coverage is clipped to the square; the map does not repeat horizontally.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use crate::camera::{Camera, Point};
use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// Default raster tile source.
pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Address of a single raster tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub z: u32,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    /// Fill a `{z}/{x}/{y}` URL template.
    #[must_use]
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// A tile together with where it lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub id: TileId,
    /// Top-left corner in screen pixels.
    pub origin: Point,
    /// Edge length in screen pixels.
    pub size: f64,
}

/// Integer tile zoom used for a continuous camera zoom.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tile_zoom(zoom: f64) -> u32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM).floor() as u32
}

/// Every tile that intersects the viewport, row by row from the north-west.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn visible_tiles(camera: &Camera) -> Vec<TilePlacement> {
    if camera.viewport_width <= 0.0 || camera.viewport_height <= 0.0 {
        return Vec::new();
    }
    let z = tile_zoom(camera.zoom);
    let n = f64::from(1_u32 << z);
    let size = camera.world_size() / n;

    let (x0, y0) = camera.screen_to_mercator(Point::new(0.0, 0.0));
    let (x1, y1) = camera.screen_to_mercator(Point::new(camera.viewport_width, camera.viewport_height));
    let last = n - 1.0;
    let min_tx = (x0 * n).floor().clamp(0.0, last) as u32;
    let max_tx = (x1 * n).floor().clamp(0.0, last) as u32;
    let min_ty = (y0 * n).floor().clamp(0.0, last) as u32;
    let max_ty = (y1 * n).floor().clamp(0.0, last) as u32;

    let mut out = Vec::new();
    for y in min_ty..=max_ty {
        for x in min_tx..=max_tx {
            let origin = camera.mercator_to_screen(f64::from(x) / n, f64::from(y) / n);
            out.push(TilePlacement { id: TileId { z, x, y }, origin, size });
        }
    }
    out
}
