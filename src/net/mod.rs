//! Networking for the external banking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls and interprets their responses; `types` defines
//! the wire schema.

pub mod api;
pub mod types;
