//! Rendering: draws the full map scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of engine state and the tile image cache and
//! produces pixels; it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) returns the result to the host.

use std::collections::HashMap;
use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::camera::{Camera, Point};
use crate::consts::POINT_RADIUS_PX;
use crate::doc::SampleFeature;
use crate::engine::EngineCore;
use crate::input::{BandMode, Marquee};
use crate::tiles::{TileId, TilePlacement};

const BACKGROUND: &str = "#dfe6ec";
const POINT_FILL: &str = "#e4572e";
const SELECTED_FILL: &str = "#1e90ff";
const POINT_STROKE: &str = "#ffffff";
const HOVER_STROKE: &str = "#222222";
const ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Selected points are drawn this much larger than plain ones.
const SELECTED_RADIUS_SCALE: f64 = 1.5;

/// Marquee dash segment length in screen pixels.
const MARQUEE_DASH_PX: f64 = 4.0;

/// Draw the full scene: tiles, sample points, hover ring, and rubber band.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    placements: &[TilePlacement],
    tile_images: &HashMap<TileId, HtmlImageElement>,
) -> Result<(), JsValue> {
    let camera = &core.camera;
    let (w, h) = (camera.viewport_width, camera.viewport_height);

    // Layer 1: clear in CSS pixel space.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Layer 2: raster tiles that have finished loading.
    for placement in placements {
        if let Some(img) = tile_images.get(&placement.id) {
            if img.complete() && img.natural_width() > 0 {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    placement.origin.x,
                    placement.origin.y,
                    placement.size,
                    placement.size,
                )?;
            }
        }
    }

    // Layer 3: points, unselected first so selected ones sit on top.
    let (selected, plain): (Vec<&SampleFeature>, Vec<&SampleFeature>) = core
        .doc
        .features()
        .iter()
        .partition(|f| core.ui.selected_ids.contains(&f.id));
    for feature in plain {
        draw_point(ctx, camera, feature, POINT_FILL, POINT_RADIUS_PX)?;
    }
    for feature in selected {
        draw_point(ctx, camera, feature, SELECTED_FILL, POINT_RADIUS_PX * SELECTED_RADIUS_SCALE)?;
    }

    // Layer 4: interaction feedback.
    if let Some(feature) = core.ui.hovered_id.as_deref().and_then(|id| core.doc.get(id)) {
        draw_hover_ring(ctx, camera.lnglat_to_screen(feature.position))?;
    }
    if let Some(marquee) = core.ui.marquee {
        draw_marquee(ctx, marquee)?;
    }

    draw_attribution(ctx, w, h)
}

fn on_screen(camera: &Camera, p: Point, margin: f64) -> bool {
    p.x >= -margin && p.y >= -margin && p.x <= camera.viewport_width + margin && p.y <= camera.viewport_height + margin
}

fn draw_point(
    ctx: &CanvasRenderingContext2d,
    camera: &Camera,
    feature: &SampleFeature,
    fill: &str,
    radius: f64,
) -> Result<(), JsValue> {
    let p = camera.lnglat_to_screen(feature.position);
    if !on_screen(camera, p, radius) {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(p.x, p.y, radius, 0.0, TAU)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(POINT_STROKE);
    ctx.stroke();
    Ok(())
}

fn draw_hover_ring(ctx: &CanvasRenderingContext2d, p: Point) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(p.x, p.y, POINT_RADIUS_PX * 2.0, 0.0, TAU)?;
    ctx.set_line_width(1.5);
    ctx.set_stroke_style_str(HOVER_STROKE);
    ctx.stroke();
    Ok(())
}

fn draw_marquee(ctx: &CanvasRenderingContext2d, marquee: Marquee) -> Result<(), JsValue> {
    let (stroke, fill) = match marquee.mode {
        BandMode::Add => ("#1E90FF", "rgba(30, 144, 255, 0.12)"),
        BandMode::Remove => ("#D64545", "rgba(214, 69, 69, 0.12)"),
    };
    let r = marquee.rect;
    ctx.save();
    let dash_array = js_sys::Array::new();
    dash_array.push(&MARQUEE_DASH_PX.into());
    dash_array.push(&MARQUEE_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.set_stroke_style_str(stroke);
    ctx.set_fill_style_str(fill);
    ctx.set_line_width(1.0);
    ctx.fill_rect(r.min.x, r.min.y, r.width(), r.height());
    ctx.stroke_rect(r.min.x, r.min.y, r.width(), r.height());
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

fn draw_attribution(ctx: &CanvasRenderingContext2d, w: f64, h: f64) -> Result<(), JsValue> {
    const PAD: f64 = 4.0;
    const LINE_H: f64 = 14.0;
    ctx.save();
    ctx.set_font("11px sans-serif");
    let text_w = ctx.measure_text(ATTRIBUTION)?.width();
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.75)");
    ctx.fill_rect(w - text_w - PAD * 2.0, h - LINE_H, text_w + PAD * 2.0, LINE_H);
    ctx.set_fill_style_str("#333333");
    ctx.set_text_baseline("bottom");
    ctx.fill_text(ATTRIBUTION, w - text_w - PAD, h - 2.0)?;
    ctx.restore();
    Ok(())
}
