//! Shared numeric constants for the map crate.

// ── Projection ──────────────────────────────────────────────────

/// Edge length of one raster tile in CSS pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web-Mercator square.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Coarsest zoom level (whole world in one tile).
pub const MIN_ZOOM: f64 = 0.0;

/// Finest zoom level served by standard XYZ tile servers.
pub const MAX_ZOOM: f64 = 19.0;

// ── Initial view ────────────────────────────────────────────────

/// Longitude of the initial map center.
pub const DEFAULT_CENTER_LON: f64 = 0.0;

/// Latitude of the initial map center.
pub const DEFAULT_CENTER_LAT: f64 = 20.0;

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 2.0;

// ── Interaction ─────────────────────────────────────────────────

/// Rendered radius of a sample point in screen pixels.
pub const POINT_RADIUS_PX: f64 = 4.0;

/// Screen-space hit slop for clicking a sample point.
pub const HIT_RADIUS_PX: f64 = 8.0;

/// Pointer travel (screen pixels) that turns a press into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

/// Zoom levels gained per wheel pixel (negative `dy` zooms in).
pub const WHEEL_ZOOM_RATE: f64 = 0.002;

/// Zoom levels per `+` / `-` key press.
pub const KEY_ZOOM_STEP: f64 = 1.0;

// ── Tiles ───────────────────────────────────────────────────────

/// Tile images kept before the cache is pruned to the visible set.
pub const MAX_CACHED_TILES: usize = 256;
