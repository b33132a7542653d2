//! Slippy-map rendering and input engine for the sample browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the sample map: translating raw DOM input events into
//! selection and viewport intents, maintaining a Web-Mercator camera for
//! pan/zoom, hit-testing sample points, and rendering raster tiles plus point
//! features. The host Leptos layer is responsible only for wiring DOM events
//! to the engine and applying the resulting [`engine::Action`]s to its stores.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Sample point features loaded from GeoJSON |
//! | [`camera`] | Web-Mercator camera and coordinate conversions |
//! | [`tiles`] | XYZ raster tile coverage for the current camera |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing points and rubber-band rectangles |
//! | [`render`] | Canvas2D scene rendering |
//! | [`consts`] | Shared numeric constants (zoom limits, pixel radii, etc.) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod tiles;
