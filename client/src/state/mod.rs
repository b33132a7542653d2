//! Client-side reactive stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each store is plain data wrapped in an `RwSignal` and provided through
//! Leptos context by `app::App`. Pages read and mutate them with
//! `expect_context`; the types themselves stay free of browser APIs so their
//! rules are unit tested directly.

pub mod auth;
pub mod debounce;
pub mod filter;
pub mod pagination;
pub mod query;
pub mod samples;
pub mod selection;
pub mod ui;
