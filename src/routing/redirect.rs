//! Where a navigation ends up: guard redirects, continue-to handling, and
//! role landings after login.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login redirect carries the requested path in the `continue` query
//! parameter. After a successful login that path wins over the role landing,
//! but only if the guard still allows it for the new session.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::guard::{Decision, authorize};
use super::table::{ADMIN_HOME, Access, CUSTOMER_HOME, EMPLOYEE_HOME, HOME, LOGIN, RouteTable, UNAUTHORIZED, path_only};
use crate::session::{Role, Session};

/// Query parameter carrying the originally requested path.
pub const CONTINUE_PARAM: &str = "continue";

/// Path punctuation stays readable; query and fragment delimiters do not.
const CONTINUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'/').remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Login URL that returns to `requested` after authentication.
pub fn login_redirect(requested: &str) -> String {
    format!("{LOGIN}?{CONTINUE_PARAM}={}", utf8_percent_encode(requested, CONTINUE_ENCODE_SET))
}

/// Redirect target for `decision`, `None` when the view may render.
pub fn redirect_for(decision: Decision, requested: &str) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::RedirectLogin => Some(login_redirect(requested)),
        Decision::RedirectUnauthorized => Some(UNAUTHORIZED.to_owned()),
    }
}

/// Guard decision for a view mounted behind the guard. A path with no rule in
/// `table` fails closed: login when anonymous, unauthorized otherwise.
pub fn decide_guarded(table: &RouteTable, session: &Session, path: &str) -> Decision {
    match table.access_for(path) {
        Some(Access::Guarded(required)) => authorize(session, required),
        Some(Access::Public) => Decision::Allow,
        None if session.is_authenticated() => Decision::RedirectUnauthorized,
        None => Decision::RedirectLogin,
    }
}

/// Default destination for a freshly authenticated session.
pub fn landing_for(session: &Session) -> &'static str {
    match session.role() {
        Some(Role::Admin) => ADMIN_HOME,
        Some(Role::Employee) => EMPLOYEE_HOME,
        Some(Role::User) => CUSTOMER_HOME,
        Some(Role::Unrecognized(_)) | None => HOME,
    }
}

/// Already-authenticated visits to the login view skip the form.
pub fn login_view_redirect(session: &Session) -> Option<&'static str> {
    session.is_authenticated().then(|| landing_for(session))
}

/// Accept only same-origin absolute paths.
pub fn sanitize_continue_to(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let same_origin = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
    same_origin.then_some(raw)
}

/// Destination after `login`: the continue-to path if the guard allows it,
/// otherwise the role landing.
pub fn post_login_destination(table: &RouteTable, session: &Session, continue_to: Option<&str>) -> String {
    let honored = continue_to
        .and_then(sanitize_continue_to)
        .filter(|target| path_only(target) != LOGIN)
        .filter(|target| match table.access_for(target) {
            Some(Access::Guarded(required)) => authorize(session, required) == Decision::Allow,
            Some(Access::Public) | None => false,
        });
    match honored {
        Some(target) => target.to_owned(),
        None => landing_for(session).to_owned(),
    }
}
