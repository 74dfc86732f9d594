//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{guarded_route::GuardedRoute, navbar::Navbar};
use crate::config::ClientConfig;
use crate::pages::{
    home::HomePage, login::LoginPage, not_found::NotFoundPage, portal::PortalPage, unauthorized::UnauthorizedPage,
};
use crate::routing::RouteTable;
use crate::session::{SessionStore, platform_storage};
use crate::state::auth::AuthContext;

fn guarded_portal() -> impl IntoView {
    view! {
        <GuardedRoute>
            <PortalPage/>
        </GuardedRoute>
    }
}

/// Root application component.
///
/// Opens the one session store of this client, provides it together with
/// the route table and config, and sets up client-side routing.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::initialize_with_keys(platform_storage(), config.session_keys.clone());
    store.subscribe_to_external_change(|session| {
        log::info!("session changed in another tab, authenticated: {}", session.is_authenticated());
    });

    provide_context(AuthContext::new(store));
    provide_context(RouteTable::banking());
    provide_context(config);

    view! {
        <Title text="Bank Portal"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=PortalPage/>
                    <Route path=StaticSegment("employee") view=PortalPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>

                    <Route path=StaticSegment("dashboard") view=guarded_portal/>
                    <Route path=StaticSegment("transfer") view=guarded_portal/>
                    <Route path=StaticSegment("check-balance") view=guarded_portal/>
                    <Route path=StaticSegment("history") view=guarded_portal/>
                    <Route path=StaticSegment("apply-loan") view=guarded_portal/>
                    <Route path=StaticSegment("my-loans") view=guarded_portal/>
                    <Route path=StaticSegment("apply-fd") view=guarded_portal/>
                    <Route path=StaticSegment("my-fds") view=guarded_portal/>

                    <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=guarded_portal/>
                    <Route path=(StaticSegment("admin"), StaticSegment("pending")) view=guarded_portal/>
                    <Route path=(StaticSegment("admin"), StaticSegment("applications")) view=guarded_portal/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("applications"), ParamSegment("app_id"))
                        view=guarded_portal
                    />
                    <Route path=(StaticSegment("admin"), StaticSegment("loan"), StaticSegment("pending")) view=guarded_portal/>
                    <Route path=(StaticSegment("admin"), StaticSegment("fd"), StaticSegment("pending")) view=guarded_portal/>

                    <Route path=(StaticSegment("employee"), StaticSegment("dashboard")) view=guarded_portal/>
                    <Route path=(StaticSegment("employee"), StaticSegment("deposit")) view=guarded_portal/>
                    <Route path=(StaticSegment("employee"), StaticSegment("withdraw")) view=guarded_portal/>
                    <Route path=(StaticSegment("employee"), StaticSegment("check-balance")) view=guarded_portal/>
                </Routes>
            </main>
        </Router>
    }
}
