//! Navigation policy: the view table, the authorization guard, and the
//! redirects it produces.
//!
//! ARCHITECTURE
//! ============
//! Everything here is pure. Components feed in the live session and the
//! current path; rendering and navigation stay in `components` and `util`.

pub mod guard;
pub mod redirect;
pub mod table;

pub use guard::{Decision, RequiredRoles, authorize};
pub use redirect::{
    CONTINUE_PARAM, decide_guarded, landing_for, login_redirect, login_view_redirect, post_login_destination,
    redirect_for,
};
pub use table::{Access, RouteRule, RouteTable};
