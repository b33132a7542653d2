//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's orchestration: guards, query effects and form
//! submission. Rendering details live in `components`; shared stores come
//! from context provided by `app::App`.

pub mod account;
pub mod activate;
pub mod login;
pub mod register;
pub mod reset_finish;
pub mod reset_password;
pub mod sample_detail;
pub mod samples;
