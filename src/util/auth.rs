//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: the guard decision for
//! the current path is recomputed whenever the session or the path changes,
//! and any redirect replaces the history entry.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::{Decision, RouteTable, decide_guarded, login_view_redirect, post_login_destination, redirect_for};
use crate::session::Session;
use crate::state::auth::AuthContext;

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect target for a guarded view at `path`, logging denials.
pub fn guard_redirect(table: &RouteTable, session: &Session, path: &str) -> Option<String> {
    let decision = decide_guarded(table, session, path);
    match decision {
        Decision::Allow => {}
        Decision::RedirectLogin => log::debug!("{path} requires login"),
        Decision::RedirectUnauthorized => {
            let role = session.role().map(ToString::to_string).unwrap_or_default();
            log::warn!("access denied to {path} for role {role}");
        }
    }
    redirect_for(decision, path)
}

/// Where the login view should send the browser, if anywhere.
///
/// A visit while already authenticated goes to the role landing. A login
/// completed on this page may return to the continue-to path instead.
pub fn login_view_target(
    table: &RouteTable,
    session: &Session,
    logged_in_here: bool,
    continue_to: Option<&str>,
) -> Option<String> {
    if logged_in_here && session.is_authenticated() {
        return Some(post_login_destination(table, session, continue_to));
    }
    login_view_redirect(session).map(str::to_owned)
}

/// Redirect away from `path` whenever the guard denies it.
pub fn install_route_guard<F>(auth: AuthContext, table: RouteTable, path: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let session = auth.session();
        let path = path.get();
        if let Some(target) = guard_redirect(&table, &session, &path) {
            navigate(&target, replace_history());
        }
    });
}

/// Leave the login view once a session exists.
pub fn install_login_redirect<F>(
    auth: AuthContext,
    table: RouteTable,
    logged_in_here: RwSignal<bool>,
    continue_to: Memo<Option<String>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let session = auth.session();
        let continue_to = continue_to.get();
        if let Some(target) = login_view_target(&table, &session, logged_in_here.get(), continue_to.as_deref()) {
            navigate(&target, replace_history());
        }
    });
}
