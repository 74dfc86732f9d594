//! Authorization roles as issued by the banking backend.
//!
//! DESIGN
//! ======
//! The backend speaks Spring-style role strings (`ROLE_ADMIN`). Anonymous is
//! not a role value here: it is the absence of an authenticated session.
//! Role strings persisted by some other writer are kept verbatim in
//! `Unrecognized` so they can be reported but never grant access.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_EMPLOYEE: &str = "ROLE_EMPLOYEE";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Role claim of an authenticated principal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Retail customer.
    User,
    /// Branch employee handling deposits and withdrawals.
    Employee,
    /// Bank administrator.
    Admin,
    /// A role string outside the known set, as read from storage.
    Unrecognized(String),
}

impl Role {
    /// Parse a wire role string. Unknown non-empty values become
    /// [`Role::Unrecognized`]; empty or whitespace-only input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw {
            ROLE_USER => Self::User,
            ROLE_EMPLOYEE => Self::Employee,
            ROLE_ADMIN => Self::Admin,
            other => Self::Unrecognized(other.to_owned()),
        })
    }

    /// Wire representation, as stored under the role key.
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => ROLE_USER,
            Self::Employee => ROLE_EMPLOYEE,
            Self::Admin => ROLE_ADMIN,
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the roles the backend can issue.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
