//! Networking modules for the LithoDat REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the transport and error shape, `api` maps endpoints onto it,
//! and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
