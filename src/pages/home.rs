use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::{JOB_APPLICATION, LOGIN, REGISTER};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome to the Bank"</h1>
            <p>"Sign in to manage your accounts, transfers, loans and fixed deposits."</p>
            <div class="home-page__actions">
                <A href=LOGIN attr:class="home-page__action">"Customer Login"</A>
                <A href=REGISTER attr:class="home-page__action">"Open an Account"</A>
                <A href=JOB_APPLICATION attr:class="home-page__action">"Employee Booth"</A>
            </div>
        </div>
    }
}
