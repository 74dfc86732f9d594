use super::*;
use crate::session::Role;

fn table() -> RouteTable {
    RouteTable::banking()
}

#[test]
fn should_redirect_anonymous_with_continue_to() {
    assert_eq!(
        guard_redirect(&table(), &Session::Anonymous, "/apply-loan").as_deref(),
        Some("/login?continue=/apply-loan")
    );
}

#[test]
fn should_not_redirect_member_role() {
    let session = Session::authenticated(Role::Employee, "E1");
    assert_eq!(guard_redirect(&table(), &session, "/employee/check-balance"), None);
}

#[test]
fn should_redirect_wrong_role_to_unauthorized() {
    let session = Session::authenticated(Role::User, "C1");
    assert_eq!(guard_redirect(&table(), &session, "/employee/deposit").as_deref(), Some("/unauthorized"));
}

#[test]
fn should_not_redirect_public_view() {
    assert_eq!(guard_redirect(&table(), &Session::Anonymous, "/"), None);
}

#[test]
fn should_redirect_view_missing_from_table() {
    assert_eq!(
        guard_redirect(&table(), &Session::Anonymous, "/admin/audit").as_deref(),
        Some("/login?continue=/admin/audit")
    );
    let session = Session::authenticated(Role::Admin, "A1");
    assert_eq!(guard_redirect(&table(), &session, "/admin/audit").as_deref(), Some("/unauthorized"));
}

#[test]
fn login_view_stays_for_anonymous() {
    assert_eq!(login_view_target(&table(), &Session::Anonymous, false, Some("/transfer")), None);
    assert_eq!(login_view_target(&table(), &Session::Anonymous, true, Some("/transfer")), None);
}

#[test]
fn login_view_short_circuits_existing_session_to_landing() {
    let session = Session::authenticated(Role::User, "C1");
    assert_eq!(login_view_target(&table(), &session, false, None).as_deref(), Some("/dashboard"));
    assert_eq!(login_view_target(&table(), &session, false, Some("/transfer")).as_deref(), Some("/dashboard"));
}

#[test]
fn login_view_honors_continue_to_after_login() {
    let session = Session::authenticated(Role::User, "C1");
    assert_eq!(login_view_target(&table(), &session, true, Some("/transfer")).as_deref(), Some("/transfer"));
}

#[test]
fn login_view_ignores_disallowed_continue_to_after_login() {
    let session = Session::authenticated(Role::Employee, "E1");
    assert_eq!(
        login_view_target(&table(), &session, true, Some("/admin/loan/pending")).as_deref(),
        Some("/employee/dashboard")
    );
}
