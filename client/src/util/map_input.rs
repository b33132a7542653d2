//! DOM event → map engine input mapping, plus viewport sync.
//!
//! Everything touching `map` types is hydrate-only because the engine crate
//! is a browser dependency; the key filter is plain and shared.

#[cfg(test)]
#[path = "map_input_test.rs"]
mod map_input_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use map::camera::{BoundingBox, Point as MapPoint};
#[cfg(feature = "hydrate")]
use map::engine::Engine;
#[cfg(feature = "hydrate")]
use map::input::{Button as MapButton, Modifiers as MapModifiers};

#[cfg(feature = "hydrate")]
use crate::net::types::BBox;

/// Keys the map consumes; the browser default (page zoom, scroll) is suppressed.
#[must_use]
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "+" | "=" | "-" | "_" | "Escape")
}

#[cfg(feature = "hydrate")]
pub fn map_button(button: i16) -> MapButton {
    match button {
        1 => MapButton::Middle,
        2 => MapButton::Secondary,
        _ => MapButton::Primary,
    }
}

#[cfg(feature = "hydrate")]
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> MapModifiers {
    MapModifiers { shift, ctrl, alt, meta }
}

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> MapPoint {
    MapPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> MapPoint {
    MapPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> MapPoint {
    MapPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn to_filter_bbox(bounds: BoundingBox) -> BBox {
    BBox { min_lon: bounds.min_lon, min_lat: bounds.min_lat, max_lon: bounds.max_lon, max_lat: bounds.max_lat }
}

/// Size the engine to the canvas element's CSS box and device pixel ratio.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}
