//! Guard wrapper for role-restricted views.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::{Decision, RouteTable, decide_guarded};
use crate::state::auth::AuthContext;
use crate::util::auth::install_route_guard;

/// Render `children` only while the guard allows the current path; otherwise
/// redirect to login (with continue-to) or to the unauthorized view.
///
/// Requirements come from the `RouteTable` in context, keyed by path. A path
/// missing from the table never renders.
#[component]
pub fn GuardedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let table = expect_context::<RouteTable>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    install_route_guard(auth, table.clone(), pathname, navigate);

    let allowed = move || decide_guarded(&table, &auth.session(), &pathname.get()) == Decision::Allow;

    view! {
        <Show when=allowed>
            {children()}
        </Show>
    }
}
