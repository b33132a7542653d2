//! Bridge component between Leptos state and the imperative `map::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The map crate owns camera math, hit testing and drawing. This host feeds
//! it the geo-feature query result and the canonical selection, wires DOM
//! events into it, and applies the returned actions to the stores: selection
//! edits, detail-modal opens and debounced bbox updates. Renders are
//! coalesced into one `requestAnimationFrame` per frame.

use leptos::prelude::*;

use crate::state::samples::SampleQueries;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use map::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use map::input::{Key as MapKey, WheelDelta};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::filter::{SampleFilter, update_bbox};
#[cfg(feature = "hydrate")]
use crate::state::selection::SelectionState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
#[cfg(feature = "hydrate")]
use crate::util::config::tile_url_template;
#[cfg(feature = "hydrate")]
use crate::util::map_input::{
    map_button, map_modifiers, mouse_point, pointer_point, should_prevent_default_key, sync_viewport, to_filter_bbox,
    wheel_point,
};

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "hydrate")]
fn render_now(engine: &SharedEngine) {
    if let Some(engine) = engine.borrow_mut().as_mut() {
        if let Err(e) = engine.render() {
            log::warn!("map render failed: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
fn request_render(engine: &SharedEngine, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        render_now(engine);
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        render_now(&engine_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        render_now(engine);
    }
}

/// Stores the engine's actions write into.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct ActionTargets {
    selection: RwSignal<SelectionState>,
    filter: RwSignal<SampleFilter>,
    ui: RwSignal<UiState>,
    cursor: RwSignal<String>,
    raf_pending: RwSignal<bool>,
}

#[cfg(feature = "hydrate")]
fn process_actions(actions: Vec<Action>, engine: &SharedEngine, targets: ActionTargets) {
    for action in actions {
        match action {
            Action::ToggleSelection(id) => targets.selection.update(|s| s.toggle(&id)),
            Action::SelectMany(ids) => targets.selection.update(|s| s.select_many(ids)),
            Action::DeselectMany(ids) => targets.selection.update(|s| s.deselect_many(ids)),
            Action::OpenDetail(id) => targets.ui.update(|u| u.open_detail(id)),
            Action::ViewportChanged(bounds) => update_bbox(targets.filter, to_filter_bbox(bounds)),
            Action::SetCursor(cursor) => targets.cursor.set(cursor),
            Action::RenderNeeded => request_render(engine, targets.raf_pending),
        }
    }
}

/// Map view. `visible` lets the page keep the component mounted while the
/// table is shown; the canvas is re-measured when it becomes visible again.
#[component]
pub fn SamplesMap(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let queries = expect_context::<SampleQueries>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let cursor = RwSignal::new("grab".to_owned());
    let feature_count = move || queries.geo.with(|q| q.data.as_ref().map_or(0, |c| c.features.len()));

    #[cfg(feature = "hydrate")]
    let targets = ActionTargets {
        selection: expect_context::<RwSignal<SelectionState>>(),
        filter: expect_context::<RwSignal<SampleFilter>>(),
        ui: expect_context::<RwSignal<UiState>>(),
        cursor,
        raf_pending: RwSignal::new(false),
    };
    #[cfg(feature = "hydrate")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    #[cfg(not(feature = "hydrate"))]
    let _ = visible;

    // Mount the engine once the canvas exists.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = Engine::new(canvas, tile_url_template());
            let engine_for_tiles = Rc::clone(&engine);
            instance.set_on_tile_load(move || request_render(&engine_for_tiles, targets.raf_pending));
            sync_viewport(&mut instance, &canvas_ref);
            instance.set_selection(targets.selection.with_untracked(|s| s.ids().clone()));
            if let Some(collection) = queries.geo.with_untracked(|q| q.data.clone()) {
                instance.load_features(&collection);
            }
            *engine.borrow_mut() = Some(instance);
            request_render(&engine, targets.raf_pending);
        });
    }

    // Feed geo-feature results into the engine.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let collection = queries.geo.with(|q| q.data.clone());
            if let Some(engine) = engine.borrow_mut().as_mut() {
                match collection {
                    Some(collection) => engine.load_features(&collection),
                    None => engine.clear_features(),
                }
            }
            request_render(&engine, targets.raf_pending);
        });
    }

    // Push the canonical selection back into the engine's mirror.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let ids = targets.selection.with(|s| s.ids().clone());
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_selection(ids);
            }
            request_render(&engine, targets.raf_pending);
        });
    }

    // Re-measure when shown again and on window resize.
    #[cfg(feature = "hydrate")]
    {
        let resized = RwSignal::new(0_u32);
        let handle = window_event_listener(leptos::ev::resize, move |_| resized.update(|n| *n = n.wrapping_add(1)));
        on_cleanup(move || handle.remove());

        let engine = Rc::clone(&engine);
        Effect::new(move || {
            resized.track();
            if !visible.get() {
                return;
            }
            if let Some(engine) = engine.borrow_mut().as_mut() {
                sync_viewport(engine, &canvas_ref);
            }
            request_render(&engine, targets.raf_pending);
        });
    }

    #[cfg(feature = "hydrate")]
    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get_untracked() {
                let _ = canvas.focus();
                let _ = canvas.set_pointer_capture(ev.pointer_id());
            }
            let mods = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
            let actions = engine
                .borrow_mut()
                .as_mut()
                .map(|e| e.on_pointer_down(pointer_point(&ev), map_button(ev.button()), mods))
                .unwrap_or_default();
            process_actions(actions, &engine, targets);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_pointer_down = |_ev: leptos::ev::PointerEvent| {};

    #[cfg(feature = "hydrate")]
    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let mods = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
            let actions = engine
                .borrow_mut()
                .as_mut()
                .map(|e| e.on_pointer_move(pointer_point(&ev), mods))
                .unwrap_or_default();
            process_actions(actions, &engine, targets);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_pointer_move = |_ev: leptos::ev::PointerEvent| {};

    #[cfg(feature = "hydrate")]
    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(canvas) = canvas_ref.get_untracked() {
                let _ = canvas.release_pointer_capture(ev.pointer_id());
            }
            let mods = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
            let actions = engine
                .borrow_mut()
                .as_mut()
                .map(|e| e.on_pointer_up(pointer_point(&ev), map_button(ev.button()), mods))
                .unwrap_or_default();
            process_actions(actions, &engine, targets);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_pointer_up = |_ev: leptos::ev::PointerEvent| {};

    #[cfg(feature = "hydrate")]
    let on_pointer_leave = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            let actions = engine.borrow_mut().as_mut().map(Engine::on_pointer_leave).unwrap_or_default();
            process_actions(actions, &engine, targets);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_pointer_leave = |_ev: leptos::ev::PointerEvent| {};

    #[cfg(feature = "hydrate")]
    let on_double_click = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::MouseEvent| {
            let actions = engine
                .borrow_mut()
                .as_mut()
                .map(|e| e.on_double_click(mouse_point(&ev)))
                .unwrap_or_default();
            process_actions(actions, &engine, targets);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_double_click = |_ev: leptos::ev::MouseEvent| {};

    #[cfg(feature = "hydrate")]
    let on_wheel = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            let mods = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
            let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
            let actions = engine
                .borrow_mut()
                .as_mut()
                .map(|e| e.on_wheel(wheel_point(&ev), delta, mods))
                .unwrap_or_default();
            process_actions(actions, &engine, targets);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_wheel = |_ev: leptos::ev::WheelEvent| {};

    #[cfg(feature = "hydrate")]
    let on_key_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::KeyboardEvent| {
            let key = ev.key();
            if should_prevent_default_key(&key) {
                ev.prevent_default();
            }
            let mods = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
            let actions = engine
                .borrow_mut()
                .as_mut()
                .map(|e| e.on_key_down(MapKey(key), mods))
                .unwrap_or_default();
            process_actions(actions, &engine, targets);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_key_down = |_ev: leptos::ev::KeyboardEvent| {};

    view! {
        <div class="samples-map">
            <canvas
                class="samples-map__canvas"
                node_ref=canvas_ref
                tabindex="0"
                style:cursor=move || cursor.get()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:dblclick=on_double_click
                on:wheel=on_wheel
                on:keydown=on_key_down
            ></canvas>
            <div class="samples-map__status">
                <Show when=move || queries.geo.with(|q| q.loading)>
                    <span class="spinner" aria-busy="true"></span>
                </Show>
                <span>{move || format!("{} points", feature_count())}</span>
            </div>
            <p class="samples-map__hint">
                "Drag to pan, scroll to zoom, Shift+drag to select an area, Shift+Alt+drag to deselect, double-click a point for details."
            </p>
        </div>
    }
}
