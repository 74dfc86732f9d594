//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused
//! models. The session itself lives in `crate::session`; this layer only
//! adapts it to the reactive system.

pub mod auth;
