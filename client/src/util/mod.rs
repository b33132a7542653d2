//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, build-time
//! configuration, route guards) and record-shape knowledge from page and
//! component logic so both stay testable without a browser.

pub mod auth;
pub mod config;
pub mod json_view;
pub mod map_input;
pub mod sample_record;
pub mod token;
pub mod validation;
