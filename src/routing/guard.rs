//! Route authorization decisions.
//!
//! A view declares the roles allowed to see it; the guard compares them with
//! the current session. Membership is exact: `ROLE_ADMIN` only satisfies a
//! view that lists it, there is no rank ordering between roles.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::{Role, Session};

/// Roles allowed to render a view. Empty means any authenticated role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredRoles(Vec<Role>);

impl RequiredRoles {
    pub fn any_authenticated() -> Self {
        Self::default()
    }

    pub fn of(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut listed: Vec<Role> = Vec::new();
        for role in roles {
            if !listed.contains(&role) {
                listed.push(role);
            }
        }
        Self(listed)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn roles(&self) -> &[Role] {
        &self.0
    }

    /// Whether `role` satisfies this requirement. Unrecognized roles never do.
    pub fn permits(&self, role: &Role) -> bool {
        role.is_recognized() && (self.0.is_empty() || self.0.contains(role))
    }
}

/// Outcome of a navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectLogin,
    RedirectUnauthorized,
}

/// Decide whether `session` may render a view requiring `required`.
///
/// Authentication is checked before role membership, so an anonymous
/// session is always sent to login.
pub fn authorize(session: &Session, required: &RequiredRoles) -> Decision {
    match session.role() {
        None => Decision::RedirectLogin,
        Some(role) if required.permits(role) => Decision::Allow,
        Some(_) => Decision::RedirectUnauthorized,
    }
}
