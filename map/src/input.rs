//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying the context needed to tell a click from a drag,
//! compute incremental pan deltas, and resolve a rubber band on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashSet;

use crate::camera::Point;
use crate::doc::SampleId;
use crate::hit::ScreenRect;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Escape"`, `"+"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Whether a rubber band adds to or removes from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandMode {
    Add,
    Remove,
}

impl BandMode {
    /// Shift+drag adds; Shift+Alt+drag removes.
    #[must_use]
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.alt { Self::Remove } else { Self::Add }
    }
}

/// An in-progress rubber band as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    pub rect: ScreenRect,
    pub mode: BandMode,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Sample ids currently selected by the host.
    pub selected_ids: HashSet<SampleId>,
    /// The in-progress rubber band, if any.
    pub marquee: Option<Marquee>,
    /// The sample point under the cursor, if any.
    pub hovered_id: Option<SampleId>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The primary button is down but the pointer has not yet travelled far
    /// enough to count as a drag. Releasing here is a click.
    Pressed {
        /// Screen position of the pointer-down.
        start: Point,
        /// Sample point under the pointer-down, if any.
        hit: Option<SampleId>,
    },
    /// The user is panning the map.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is dragging a selection rectangle.
    RubberBand {
        /// Screen-space corner where the drag started.
        start: Point,
        /// Screen-space position of the latest pointer event.
        current: Point,
        /// Whether release adds or removes the enclosed samples.
        mode: BandMode,
    },
}
