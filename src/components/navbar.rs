//! Top navigation bar.
//!
//! Anonymous visitors get the two booth entry points; signed-in users get the
//! portal link for their role and a logout button.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routing::table::{ADMIN_HOME, CUSTOMER_HOME, EMPLOYEE_HOME, HOME, JOB_APPLICATION, LOGIN};
use crate::session::{Role, Session};
use crate::state::auth::AuthContext;

/// Portal link for the signed-in role, if it has one.
pub fn portal_link(session: &Session) -> Option<(&'static str, &'static str)> {
    match session.role()? {
        Role::User => Some((CUSTOMER_HOME, "My Account")),
        Role::Employee => Some((EMPLOYEE_HOME, "Employee Portal")),
        Role::Admin => Some((ADMIN_HOME, "Admin Portal")),
        Role::Unrecognized(_) => None,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let go_home = move |_| navigate(HOME, NavigateOptions::default());
    let on_logout = move |_| auth.logout();

    view! {
        <nav class="navbar">
            <button class="navbar__item" on:click=go_home>"Home"</button>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| {
                    view! {
                        <A href=LOGIN attr:class="navbar__item">"Customer Booth"</A>
                        <A href=JOB_APPLICATION attr:class="navbar__item">"Employee Booth"</A>
                    }
                }
            >
                {move || {
                    portal_link(&auth.session())
                        .map(|(href, label)| view! { <A href=href attr:class="navbar__item">{label}</A> })
                }}
                <button class="navbar__item navbar__item--danger" on:click=on_logout>"Logout"</button>
            </Show>
        </nav>
    }
}
