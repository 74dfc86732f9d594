//! Reactive helpers shared by pages and components.

pub mod auth;
