use super::*;

fn user() -> Session {
    Session::authenticated(Role::User, "C42")
}

// =============================================================================
// login_redirect / redirect_for
// =============================================================================

#[test]
fn login_redirect_keeps_plain_paths_readable() {
    assert_eq!(login_redirect("/my-fds"), "/login?continue=/my-fds");
    assert_eq!(login_redirect("/admin/applications/17"), "/login?continue=/admin/applications/17");
}

#[test]
fn login_redirect_escapes_query_delimiters() {
    assert_eq!(login_redirect("/transfer?to=C9&amt=5"), "/login?continue=/transfer%3Fto%3DC9%26amt%3D5");
}

#[test]
fn redirect_for_each_decision() {
    assert_eq!(redirect_for(Decision::Allow, "/transfer"), None);
    assert_eq!(redirect_for(Decision::RedirectLogin, "/transfer").as_deref(), Some("/login?continue=/transfer"));
    assert_eq!(redirect_for(Decision::RedirectUnauthorized, "/transfer").as_deref(), Some("/unauthorized"));
}

// =============================================================================
// decide_guarded
// =============================================================================

#[test]
fn decide_guarded_allows_public_views() {
    let table = RouteTable::banking();
    assert_eq!(decide_guarded(&table, &Session::Anonymous, "/register"), Decision::Allow);
    assert_eq!(decide_guarded(&table, &user(), "/unauthorized"), Decision::Allow);
}

#[test]
fn decide_guarded_guards_table_views() {
    let table = RouteTable::banking();
    assert_eq!(decide_guarded(&table, &Session::Anonymous, "/transfer"), Decision::RedirectLogin);
    assert_eq!(decide_guarded(&table, &user(), "/transfer"), Decision::Allow);
    assert_eq!(decide_guarded(&table, &user(), "/admin/pending"), Decision::RedirectUnauthorized);
}

#[test]
fn decide_guarded_fails_closed_for_paths_missing_from_table() {
    let table = RouteTable::banking();
    let admin = Session::authenticated(Role::Admin, "A1");
    assert_eq!(decide_guarded(&table, &Session::Anonymous, "/admin/audit"), Decision::RedirectLogin);
    assert_eq!(decide_guarded(&table, &admin, "/admin/audit"), Decision::RedirectUnauthorized);
    assert_eq!(decide_guarded(&table, &user(), "/no-such-page"), Decision::RedirectUnauthorized);
}

// =============================================================================
// landings
// =============================================================================

#[test]
fn landing_follows_role() {
    assert_eq!(landing_for(&Session::authenticated(Role::Admin, "A1")), "/admin/dashboard");
    assert_eq!(landing_for(&Session::authenticated(Role::Employee, "E1")), "/employee/dashboard");
    assert_eq!(landing_for(&user()), "/dashboard");
    assert_eq!(landing_for(&Session::authenticated(Role::Unrecognized("X".to_owned()), "X1")), "/");
    assert_eq!(landing_for(&Session::Anonymous), "/");
}

#[test]
fn authenticated_user_visiting_login_goes_to_customer_home() {
    assert_eq!(login_view_redirect(&user()), Some("/dashboard"));
}

#[test]
fn anonymous_visitor_sees_login_form() {
    assert_eq!(login_view_redirect(&Session::Anonymous), None);
}

// =============================================================================
// continue-to
// =============================================================================

#[test]
fn sanitize_rejects_foreign_targets() {
    assert_eq!(sanitize_continue_to("https://evil.example/"), None);
    assert_eq!(sanitize_continue_to("//evil.example/transfer"), None);
    assert_eq!(sanitize_continue_to("/\\evil.example"), None);
    assert_eq!(sanitize_continue_to("transfer"), None);
    assert_eq!(sanitize_continue_to(" /transfer "), Some("/transfer"));
}

#[test]
fn anonymous_to_customer_view_then_login_returns_there() {
    let table = RouteTable::banking();
    let requested = "/check-balance";
    assert_eq!(decide_guarded(&table, &Session::Anonymous, requested), Decision::RedirectLogin);

    let session = user();
    assert_eq!(decide_guarded(&table, &session, requested), Decision::Allow);
    assert_eq!(post_login_destination(&table, &session, Some(requested)), "/check-balance");
}

#[test]
fn continue_to_keeps_query_string() {
    let table = RouteTable::banking();
    assert_eq!(post_login_destination(&table, &user(), Some("/history?page=2")), "/history?page=2");
}

#[test]
fn continue_to_not_allowed_for_new_role_falls_back_to_landing() {
    let table = RouteTable::banking();
    assert_eq!(post_login_destination(&table, &user(), Some("/admin/dashboard")), "/dashboard");
}

#[test]
fn admin_continue_to_staff_view_is_honored() {
    let table = RouteTable::banking();
    let admin = Session::authenticated(Role::Admin, "A1");
    assert_eq!(post_login_destination(&table, &admin, Some("/employee/withdraw")), "/employee/withdraw");
}

#[test]
fn missing_unknown_or_public_continue_to_uses_landing() {
    let table = RouteTable::banking();
    let employee = Session::authenticated(Role::Employee, "E1");
    assert_eq!(post_login_destination(&table, &employee, None), "/employee/dashboard");
    assert_eq!(post_login_destination(&table, &employee, Some("/vault")), "/employee/dashboard");
    assert_eq!(post_login_destination(&table, &employee, Some("/register")), "/employee/dashboard");
    assert_eq!(post_login_destination(&table, &employee, Some("/login?continue=/x")), "/employee/dashboard");
}

#[test]
fn offsite_continue_to_uses_landing() {
    let table = RouteTable::banking();
    assert_eq!(post_login_destination(&table, &user(), Some("//evil.example/dashboard")), "/dashboard");
}
