use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::HOME;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"404 - Page Not Found"</h1>
            <A href=HOME>"Home"</A>
        </div>
    }
}
