//! REST calls to the banking backend.
//!
//! Client-side (`csr`): real HTTP via `gloo-net`.
//! Host builds: the call reports [`LoginError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`LoginError`] whose message is fit to show on
//! the login form. A caller only touches the session on `Ok`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{LoginBody, LoginGrant, LoginPayload, LoginRequest};

pub const REJECTED_MESSAGE: &str = "Login failed. Please check credentials or account status.";
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid credentials or account pending approval/disabled.";

/// Longest raw error body echoed back to the user.
const MAX_ERROR_BODY_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("{0}")]
    Rejected(String),
    #[error("Login failed: Invalid response from server.")]
    InvalidResponse,
    #[error("Network error: Could not reach the server.")]
    Network,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Login is only available in the browser.")]
    Unavailable,
}

pub(crate) fn login_endpoint(base_url: &str) -> String {
    format!("{}/login", base_url.trim_end_matches('/'))
}

/// Turn a `/login` response into a grant or a user-facing error.
pub fn interpret_login_response(status: u16, body: &str) -> Result<LoginGrant, LoginError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }

    let payload = match serde_json::from_str::<LoginBody>(body) {
        Ok(LoginBody::Flag(true)) => LoginPayload { success: Some(true), ..LoginPayload::default() },
        Ok(LoginBody::Flag(false)) => LoginPayload::default(),
        Ok(LoginBody::Payload(payload)) => payload,
        Err(_) => return Err(LoginError::InvalidResponse),
    };

    if payload.success != Some(true) {
        let message = payload.message().unwrap_or(REJECTED_MESSAGE);
        return Err(LoginError::Rejected(message.to_owned()));
    }

    let role = payload.role.as_deref().map(str::trim).filter(|r| !r.is_empty());
    match (role, payload.subject_id()) {
        (Some(role), Some(subject_id)) => Ok(LoginGrant { role: role.to_owned(), subject_id }),
        _ => Err(LoginError::InvalidResponse),
    }
}

fn status_error(status: u16, body: &str) -> LoginError {
    let payload_message = serde_json::from_str::<LoginPayload>(body)
        .ok()
        .and_then(|p| p.message().map(str::to_owned));
    let message = match payload_message {
        Some(message) => message,
        None if status == 401 => UNAUTHORIZED_MESSAGE.to_owned(),
        None => raw_body_message(body).unwrap_or_else(|| format!("Login failed (Status: {status})")),
    };
    LoginError::Status { status, message }
}

/// Plain-text error bodies are shown as-is; JSON without a message is not.
fn raw_body_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() || serde_json::from_str::<serde_json::Value>(body).is_ok_and(|v| !v.is_string()) {
        return None;
    }
    let text = serde_json::from_str::<String>(body).unwrap_or_else(|_| body.to_owned());
    Some(text.chars().take(MAX_ERROR_BODY_LENGTH).collect())
}

/// `POST {base_url}/login`.
///
/// # Errors
///
/// Returns a [`LoginError`] for transport failures, non-success statuses,
/// rejected credentials, or a success body missing the role or subject.
pub async fn login(base_url: &str, request: &LoginRequest) -> Result<LoginGrant, LoginError> {
    #[cfg(feature = "csr")]
    {
        let endpoint = login_endpoint(base_url);
        let resp = gloo_net::http::Request::post(&endpoint)
            .json(request)
            .map_err(|e| {
                log::warn!("could not encode login request: {e}");
                LoginError::InvalidResponse
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("login request to {endpoint} failed: {e}");
                LoginError::Network
            })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|_| LoginError::InvalidResponse)?;
        interpret_login_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, request);
        Err(LoginError::Unavailable)
    }
}
