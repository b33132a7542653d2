//! Map engine: gesture handling over a testable core plus the browser shell.
//!
//! DESIGN
//! ======
//! `EngineCore` holds every piece of state that does not need a DOM: the
//! feature store, the camera, the mirrored selection, and the active gesture.
//! Input handlers return `Vec<Action>` describing what the host must do
//! (toggle store selection, open a detail view, re-query for a new bbox).
//! `Engine` wraps the core with the canvas element and the raster tile cache.
//!
//! Selection changes are applied to the mirrored set immediately so the next
//! frame reflects the gesture; the host remains the owner and pushes the
//! canonical set back through [`Engine::set_selection`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::{HashMap, HashSet};

use geojson::FeatureCollection;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::camera::{BoundingBox, Camera, LngLat, Point};
use crate::consts::{DRAG_THRESHOLD_PX, KEY_ZOOM_STEP, MAX_CACHED_TILES, WHEEL_ZOOM_RATE};
use crate::doc::{FeatureStore, SampleFeature, SampleId};
use crate::hit::{self, ScreenRect};
use crate::input::{BandMode, Button, InputState, Key, Marquee, Modifiers, UiState, WheelDelta};
use crate::render;
use crate::tiles::{self, TileId};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Flip the selection state of one sample.
    ToggleSelection(SampleId),
    /// Add every listed sample to the selection.
    SelectMany(Vec<SampleId>),
    /// Remove every listed sample from the selection.
    DeselectMany(Vec<SampleId>),
    /// Show the detail view for a sample.
    OpenDetail(SampleId),
    /// The user moved the map; the visible extent is now this box.
    ViewportChanged(BoundingBox),
    SetCursor(String),
    RenderNeeded,
}

const CURSOR_IDLE: &str = "grab";
const CURSOR_HOVER: &str = "pointer";
const CURSOR_PANNING: &str = "grabbing";
const CURSOR_BAND: &str = "crosshair";

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: FeatureStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: FeatureStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the drawn sample points with the contents of `collection`.
    pub fn load_features(&mut self, collection: &FeatureCollection) {
        self.doc.load(collection);
        if let Some(id) = &self.ui.hovered_id {
            if self.doc.get(id).is_none() {
                self.ui.hovered_id = None;
            }
        }
    }

    /// Remove every sample point from the map.
    pub fn clear_features(&mut self) {
        self.doc.clear();
        self.ui.hovered_id = None;
    }

    /// Mirror the host's selection set.
    pub fn set_selection(&mut self, ids: HashSet<SampleId>) {
        self.ui.selected_ids = ids;
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.camera.viewport_width = width_css.max(0.0);
        self.camera.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    /// Center the map on `center` at `zoom` without notifying the host.
    pub fn set_view(&mut self, center: LngLat, zoom: f64) {
        self.camera.set_view(center, zoom);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        match button {
            Button::Primary if modifiers.shift => {
                let mode = BandMode::from_modifiers(modifiers);
                self.input = InputState::RubberBand { start: screen_pt, current: screen_pt, mode };
                self.ui.marquee = Some(Marquee { rect: ScreenRect::from_corners(screen_pt, screen_pt), mode });
                vec![Action::SetCursor(CURSOR_BAND.to_owned()), Action::RenderNeeded]
            }
            Button::Primary => {
                let hit = hit::hit_test(screen_pt, &self.doc, &self.camera);
                self.input = InputState::Pressed { start: screen_pt, hit };
                Vec::new()
            }
            Button::Middle => {
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::SetCursor(CURSOR_PANNING.to_owned())]
            }
            Button::Secondary => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => self.update_hover(screen_pt),
            InputState::Pressed { start, hit } => {
                if start.distance(screen_pt) < DRAG_THRESHOLD_PX {
                    self.input = InputState::Pressed { start, hit };
                    return Vec::new();
                }
                self.camera.pan_by(screen_pt.x - start.x, screen_pt.y - start.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                self.ui.hovered_id = None;
                vec![Action::SetCursor(CURSOR_PANNING.to_owned()), Action::RenderNeeded]
            }
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::RubberBand { start, mode, .. } => {
                self.input = InputState::RubberBand { start, current: screen_pt, mode };
                self.ui.marquee = Some(Marquee { rect: ScreenRect::from_corners(start, screen_pt), mode });
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Pressed { hit: Some(id), .. } => {
                if !self.ui.selected_ids.remove(&id) {
                    self.ui.selected_ids.insert(id.clone());
                }
                vec![Action::ToggleSelection(id), Action::RenderNeeded]
            }
            InputState::Pressed { hit: None, .. } => Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                let mut actions = vec![Action::ViewportChanged(self.camera.bounds())];
                actions.extend(self.update_hover(screen_pt));
                actions.push(Action::SetCursor(self.idle_cursor()));
                actions.push(Action::RenderNeeded);
                actions
            }
            InputState::RubberBand { start, mode, .. } => {
                self.ui.marquee = None;
                let rect = ScreenRect::from_corners(start, screen_pt);
                let ids = hit::features_in_rect(rect, &self.doc, &self.camera);
                let mut actions = Vec::new();
                if !ids.is_empty() {
                    match mode {
                        BandMode::Add => {
                            self.ui.selected_ids.extend(ids.iter().cloned());
                            actions.push(Action::SelectMany(ids));
                        }
                        BandMode::Remove => {
                            for id in &ids {
                                self.ui.selected_ids.remove(id);
                            }
                            actions.push(Action::DeselectMany(ids));
                        }
                    }
                }
                actions.push(Action::SetCursor(self.idle_cursor()));
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    /// Double-click on a point opens its detail view.
    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        hit::hit_test(screen_pt, &self.doc, &self.camera)
            .map(|id| vec![Action::OpenDetail(id)])
            .unwrap_or_default()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        if delta.dy == 0.0 || !delta.dy.is_finite() {
            return Vec::new();
        }
        let target = self.camera.zoom - delta.dy * WHEEL_ZOOM_RATE;
        self.zoom_to(screen_pt, target)
    }

    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "+" | "=" => self.zoom_to(self.viewport_center(), self.camera.zoom + KEY_ZOOM_STEP),
            "-" | "_" => self.zoom_to(self.viewport_center(), self.camera.zoom - KEY_ZOOM_STEP),
            "Escape" => {
                if matches!(self.input, InputState::RubberBand { .. }) {
                    self.input = InputState::Idle;
                    self.ui.marquee = None;
                    vec![Action::SetCursor(self.idle_cursor()), Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    /// The pointer left the canvas: drop hover feedback.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.ui.hovered_id.take().is_some() {
            vec![Action::SetCursor(CURSOR_IDLE.to_owned()), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Queries ---

    /// The mirrored selection set.
    #[must_use]
    pub fn selection(&self) -> &HashSet<SampleId> {
        &self.ui.selected_ids
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Geographic extent currently on screen.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.camera.bounds()
    }

    /// Look up a feature by sample id.
    #[must_use]
    pub fn feature(&self, id: &str) -> Option<&SampleFeature> {
        self.doc.get(id)
    }

    // --- Internals ---

    fn viewport_center(&self) -> Point {
        Point::new(self.camera.viewport_width * 0.5, self.camera.viewport_height * 0.5)
    }

    fn zoom_to(&mut self, anchor: Point, target: f64) -> Vec<Action> {
        let before = (self.camera.center_x, self.camera.center_y, self.camera.zoom);
        self.camera.zoom_at(anchor, target);
        let after = (self.camera.center_x, self.camera.center_y, self.camera.zoom);
        if before == after {
            return Vec::new();
        }
        vec![Action::ViewportChanged(self.camera.bounds()), Action::RenderNeeded]
    }

    fn idle_cursor(&self) -> String {
        if self.ui.hovered_id.is_some() { CURSOR_HOVER } else { CURSOR_IDLE }.to_owned()
    }

    fn update_hover(&mut self, screen_pt: Point) -> Vec<Action> {
        let hovered = hit::hit_test(screen_pt, &self.doc, &self.camera);
        if hovered == self.ui.hovered_id {
            return Vec::new();
        }
        self.ui.hovered_id = hovered;
        vec![Action::SetCursor(self.idle_cursor()), Action::RenderNeeded]
    }
}

/// The full map engine. Wraps `EngineCore` and owns the browser canvas and tile images.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
    tile_url_template: String,
    tile_images: HashMap<TileId, HtmlImageElement>,
    on_tile_load: Option<Closure<dyn Fn()>>,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, tile_url_template: impl Into<String>) -> Self {
        Self {
            canvas,
            core: EngineCore::new(),
            tile_url_template: tile_url_template.into(),
            tile_images: HashMap::new(),
            on_tile_load: None,
        }
    }

    /// Register a callback invoked whenever a tile image finishes loading.
    ///
    /// The host uses this to schedule a redraw.
    pub fn set_on_tile_load(&mut self, callback: impl Fn() + 'static) {
        self.on_tile_load = Some(Closure::new(callback));
    }

    // --- Delegated data inputs ---

    pub fn load_features(&mut self, collection: &FeatureCollection) {
        self.core.load_features(collection);
    }

    pub fn clear_features(&mut self) {
        self.core.clear_features();
    }

    pub fn set_selection(&mut self, ids: HashSet<SampleId>) {
        self.core.set_selection(ids);
    }

    pub fn set_view(&mut self, center: LngLat, zoom: f64) {
        self.core.set_view(center, zoom);
    }

    // --- Viewport ---

    /// Update viewport dimensions and size the canvas backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let dpr = self.core.dpr;
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_double_click(screen_pt)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas, requesting any missing tiles.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let placements = tiles::visible_tiles(&self.core.camera);
        for placement in &placements {
            if !self.tile_images.contains_key(&placement.id) {
                let img = self.request_tile(placement.id)?;
                self.tile_images.insert(placement.id, img);
            }
        }
        if self.tile_images.len() > MAX_CACHED_TILES {
            let keep: HashSet<TileId> = placements.iter().map(|p| p.id).collect();
            self.tile_images.retain(|id, _| keep.contains(id));
        }

        render::draw(&ctx, &self.core, &placements, &self.tile_images)
    }

    fn request_tile(&self, id: TileId) -> Result<HtmlImageElement, JsValue> {
        let img = HtmlImageElement::new()?;
        img.set_cross_origin(Some("anonymous"));
        if let Some(callback) = &self.on_tile_load {
            img.set_onload(Some(callback.as_ref().unchecked_ref()));
        }
        img.set_src(&id.url(&self.tile_url_template));
        Ok(img)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> &HashSet<SampleId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.core.bounds()
    }
}
