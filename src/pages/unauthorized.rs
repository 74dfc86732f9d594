use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::landing_for;
use crate::state::auth::AuthContext;

/// Shown when the signed-in role may not open the requested view.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let back = move || landing_for(&auth.session()).to_owned();

    view! {
        <div class="status-page">
            <h1>"403 - Access Denied"</h1>
            <p>"You do not have permission to view this page."</p>
            <A href=back>"Go back"</A>
        </div>
    }
}
