//! Declarative view table: which paths exist and who may see them.
//!
//! DESIGN
//! ======
//! The table is the single place role requirements are written down. Route
//! components look their requirement up here by path instead of carrying
//! their own role lists.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::guard::RequiredRoles;
use crate::session::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const JOB_APPLICATION: &str = "/employee";
pub const UNAUTHORIZED: &str = "/unauthorized";
pub const CUSTOMER_HOME: &str = "/dashboard";
pub const EMPLOYEE_HOME: &str = "/employee/dashboard";
pub const ADMIN_HOME: &str = "/admin/dashboard";

/// Views for customers; staff may open them too.
pub const CUSTOMER_VIEWS: [&str; 8] = [
    CUSTOMER_HOME,
    "/transfer",
    "/check-balance",
    "/history",
    "/apply-loan",
    "/my-loans",
    "/apply-fd",
    "/my-fds",
];

/// Admin console.
pub const ADMIN_VIEWS: [&str; 6] = [
    ADMIN_HOME,
    "/admin/pending",
    "/admin/applications",
    "/admin/applications/:app_id",
    "/admin/loan/pending",
    "/admin/fd/pending",
];

/// Teller console, shared with admins.
pub const EMPLOYEE_VIEWS: [&str; 4] = [
    EMPLOYEE_HOME,
    "/employee/deposit",
    "/employee/withdraw",
    "/employee/check-balance",
];

/// Who may render a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Guarded(RequiredRoles),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRule {
    /// Absolute path; `:name` segments match any single segment.
    pub pattern: &'static str,
    pub access: Access,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn public(mut self, pattern: &'static str) -> Self {
        self.rules.push(RouteRule { pattern, access: Access::Public });
        self
    }

    #[must_use]
    pub fn guarded(mut self, patterns: &[&'static str], required: &RequiredRoles) -> Self {
        for &pattern in patterns {
            self.rules.push(RouteRule { pattern, access: Access::Guarded(required.clone()) });
        }
        self
    }

    /// The bank portal's views.
    pub fn banking() -> Self {
        Self::new()
            .public(HOME)
            .public(LOGIN)
            .public(REGISTER)
            .public(JOB_APPLICATION)
            .public(UNAUTHORIZED)
            .guarded(&CUSTOMER_VIEWS, &customer_roles())
            .guarded(&ADMIN_VIEWS, &admin_roles())
            .guarded(&EMPLOYEE_VIEWS, &employee_roles())
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// First rule matching `path`. Query string and fragment are ignored.
    pub fn lookup(&self, path: &str) -> Option<&RouteRule> {
        let path = path_only(path);
        self.rules.iter().find(|rule| pattern_matches(rule.pattern, path))
    }

    pub fn access_for(&self, path: &str) -> Option<&Access> {
        self.lookup(path).map(|rule| &rule.access)
    }
}

pub fn customer_roles() -> RequiredRoles {
    RequiredRoles::of([Role::User, Role::Admin, Role::Employee])
}

pub fn admin_roles() -> RequiredRoles {
    RequiredRoles::of([Role::Admin])
}

pub fn employee_roles() -> RequiredRoles {
    RequiredRoles::of([Role::Employee, Role::Admin])
}

/// `path` without its query string or fragment.
pub fn path_only(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    let mut expected = segments(pattern);
    let mut actual = segments(path);
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) if want.starts_with(':') || want == got => {}
            _ => return false,
        }
    }
}
