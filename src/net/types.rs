//! Wire DTOs for the banking backend's login endpoint.

use serde::{Deserialize, Serialize};

/// Credentials posted to `/login`. The backend accepts either identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub customer_id: String,
    pub mobile_number: String,
    pub password: String,
}

/// Role and subject granted by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub role: String,
    pub subject_id: String,
}

/// Login response body. Some backend builds answer a bare `true`; it parses,
/// but carries no role or subject and is rejected as an invalid response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum LoginBody {
    Flag(bool),
    Payload(LoginPayload),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginPayload {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub role: Option<String>,
    /// String or number depending on the account type.
    #[serde(default)]
    pub customer_id: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginPayload {
    pub(crate) fn subject_id(&self) -> Option<String> {
        match self.customer_id.as_ref()? {
            serde_json::Value::String(s) => Some(s.trim().to_owned()).filter(|s| !s.is_empty()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}
