//! Customer login page.
//!
//! Posts credentials to the backend and, on success, opens the session. The
//! redirect effect then leaves the page: to the continue-to path when the new
//! role may see it, otherwise to the role landing. Visiting this page with a
//! session already open goes straight to the landing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::LoginRequest;
use crate::routing::{CONTINUE_PARAM, RouteTable};
use crate::state::auth::AuthContext;
use crate::util::auth::install_login_redirect;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter your customer ID or mobile number, and your password.";

/// Require a password and at least one identifier. Identifiers are trimmed;
/// the password is sent exactly as typed.
pub fn validate_login_form(customer_id: &str, mobile_number: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let customer_id = customer_id.trim();
    let mobile_number = mobile_number.trim();
    if (customer_id.is_empty() && mobile_number.is_empty()) || password.trim().is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(LoginRequest {
        customer_id: customer_id.to_owned(),
        mobile_number: mobile_number.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let table = expect_context::<RouteTable>();
    let query = use_query_map();
    let navigate = use_navigate();

    let customer_id = RwSignal::new(String::new());
    let mobile_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let logged_in_here = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let api_base_url = StoredValue::new(expect_context::<crate::config::ClientConfig>().api_base_url);

    let continue_to = Memo::new(move |_| query.with(|q| q.get_str(CONTINUE_PARAM).map(str::to_owned)));
    install_login_redirect(auth, table, logged_in_here, continue_to, navigate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_form(&customer_id.get(), &mobile_number.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let base_url = api_base_url.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&base_url, &request).await {
                    Ok(grant) => match auth.login(&grant.role, &grant.subject_id) {
                        Ok(()) => {
                            password.set(String::new());
                            logged_in_here.set(true);
                        }
                        Err(e) => {
                            log::warn!("backend granted an unusable session: {e}");
                            error.set(crate::net::api::LoginError::InvalidResponse.to_string());
                        }
                    },
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            error.set(crate::net::api::LoginError::Unavailable.to_string());
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <Show when=move || !auth.is_authenticated()>
                <div class="login-card">
                    <h1>"Customer Login"</h1>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Customer ID"
                            prop:value=move || customer_id.get()
                            on:input=move |ev| customer_id.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="tel"
                            placeholder="Mobile Number"
                            prop:value=move || mobile_number.get()
                            on:input=move |ev| mobile_number.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Login" }}
                        </button>
                    </form>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
