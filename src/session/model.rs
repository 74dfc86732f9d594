//! Session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. A snapshot is plain data: it
//! is cloned out of the store and never mutated in place.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use super::role::Role;

/// Identity of an authenticated principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Role claim assigned by the backend.
    pub role: Role,
    /// Customer or staff identifier. Never empty.
    pub subject_id: String,
}

/// Authentication state of the client.
///
/// Role and subject id only exist inside `Authenticated`, so a reader can
/// never see a logged-in flag without its identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn authenticated(role: Role, subject_id: impl Into<String>) -> Self {
        Self::Authenticated(Identity { role, subject_id: subject_id.into() })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Role of the principal, `None` when anonymous.
    pub fn role(&self) -> Option<&Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(&identity.role),
        }
    }

    pub fn subject_id(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(identity.subject_id.as_str()),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }
}
