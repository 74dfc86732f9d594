//! # bank-portal
//!
//! Leptos + WASM client for the banking demo. Owns the client-side session
//! (who is signed in, with which role) and the route guard that decides,
//! on every navigation, whether a view renders or the browser is sent to
//! login or to the access-denied page.
//!
//! Browser code is behind the `csr` feature; without it the crate builds
//! natively with an in-memory storage medium so the session and routing
//! logic can be tested on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = match config::ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("falling back to default config: {e}").into());
            config::ClientConfig::default()
        }
    };
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }

    leptos::mount::mount_to_body(move || view! { <app::App config/> });
}
