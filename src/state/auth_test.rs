#![cfg(not(feature = "csr"))]

use super::*;
use crate::session::{MemoryStorage, Role};

fn context_over(storage: &MemoryStorage) -> AuthContext {
    AuthContext::new(SessionStore::initialize(storage.clone()))
}

#[test]
fn starts_from_persisted_snapshot() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        SessionStore::initialize(storage.clone()).login("ROLE_EMPLOYEE", "E1").unwrap();
        let auth = context_over(&storage.sibling());
        assert_eq!(auth.session_untracked(), Session::authenticated(Role::Employee, "E1"));
    });
}

#[test]
fn login_updates_signal_mirror() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = context_over(&MemoryStorage::new());
        auth.login("ROLE_USER", "C42").unwrap();
        assert_eq!(auth.session_untracked(), Session::authenticated(Role::User, "C42"));
        auth.logout();
        assert_eq!(auth.session_untracked(), Session::Anonymous);
    });
}

#[test]
fn rejected_login_leaves_mirror_alone() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = context_over(&MemoryStorage::new());
        assert_eq!(auth.login("", "C42"), Err(SessionError::EmptyRole));
        assert_eq!(auth.session_untracked(), Session::Anonymous);
    });
}

#[test]
fn external_logout_reaches_mirror() {
    let owner = Owner::new();
    owner.with(|| {
        let tab_a = MemoryStorage::new();
        let tab_b = tab_a.sibling();
        let auth = context_over(&tab_a);
        auth.login("ROLE_ADMIN", "A1").unwrap();

        SessionStore::initialize(tab_b).logout();

        assert_eq!(auth.session_untracked(), Session::Anonymous);
    });
}
