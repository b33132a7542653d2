//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app frame and the samples screens while reading and
//! writing the shared stores from Leptos context providers.

pub mod detail_modal;
pub mod error_display;
pub mod filter_bar;
pub mod layout;
pub mod pager;
pub mod region_selector;
pub mod sample_detail_viewer;
pub mod samples_map;
pub mod samples_table;
pub mod selection_bar;
pub mod user_picker;
