use super::*;

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
    assert_eq!(session.subject_id(), None);
    assert!(session.identity().is_none());
}

#[test]
fn authenticated_exposes_role_and_subject() {
    let session = Session::authenticated(Role::Admin, "A1");
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(&Role::Admin));
    assert_eq!(session.subject_id(), Some("A1"));
}

#[test]
fn sessions_compare_by_value() {
    assert_eq!(Session::authenticated(Role::User, "C42"), Session::authenticated(Role::User, "C42"));
    assert_ne!(Session::authenticated(Role::User, "C42"), Session::authenticated(Role::User, "C43"));
    assert_ne!(Session::authenticated(Role::User, "C42"), Session::Anonymous);
}
