//! Reusable UI components.

pub mod navbar;
pub mod guarded_route;
