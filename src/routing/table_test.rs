use super::*;

// =============================================================================
// path handling
// =============================================================================

#[test]
fn path_only_strips_query_and_fragment() {
    assert_eq!(path_only("/transfer?amount=5"), "/transfer");
    assert_eq!(path_only("/history#latest"), "/history");
    assert_eq!(path_only("/my-fds"), "/my-fds");
}

#[test]
fn root_pattern_matches_only_root() {
    assert!(pattern_matches("/", "/"));
    assert!(!pattern_matches("/", "/transfer"));
}

#[test]
fn trailing_slash_is_ignored() {
    assert!(pattern_matches("/transfer", "/transfer/"));
}

#[test]
fn param_segment_matches_any_single_segment() {
    assert!(pattern_matches("/admin/applications/:app_id", "/admin/applications/17"));
    assert!(!pattern_matches("/admin/applications/:app_id", "/admin/applications"));
    assert!(!pattern_matches("/admin/applications/:app_id", "/admin/applications/17/notes"));
}

#[test]
fn relative_paths_never_match() {
    assert!(!pattern_matches("/transfer", "transfer"));
}

// =============================================================================
// banking table
// =============================================================================

#[test]
fn public_views_are_public() {
    let table = RouteTable::banking();
    for path in [HOME, LOGIN, REGISTER, JOB_APPLICATION, UNAUTHORIZED] {
        assert_eq!(table.access_for(path), Some(&Access::Public), "{path}");
    }
}

#[test]
fn customer_views_admit_all_roles() {
    let table = RouteTable::banking();
    for path in CUSTOMER_VIEWS {
        assert_eq!(table.access_for(path), Some(&Access::Guarded(customer_roles())), "{path}");
    }
}

#[test]
fn admin_views_are_admin_only() {
    let table = RouteTable::banking();
    assert_eq!(table.access_for("/admin/applications/42"), Some(&Access::Guarded(admin_roles())));
    assert_eq!(table.access_for("/admin/fd/pending"), Some(&Access::Guarded(admin_roles())));
}

#[test]
fn employee_views_list_admin_explicitly() {
    let table = RouteTable::banking();
    let Some(Access::Guarded(required)) = table.access_for("/employee/deposit") else {
        panic!("employee deposit should be guarded");
    };
    assert_eq!(required.roles(), &[Role::Employee, Role::Admin]);
}

#[test]
fn job_application_is_not_shadowed_by_employee_console() {
    let table = RouteTable::banking();
    assert_eq!(table.access_for("/employee"), Some(&Access::Public));
    assert!(matches!(table.access_for("/employee/dashboard"), Some(Access::Guarded(_))));
}

#[test]
fn unknown_path_has_no_rule() {
    let table = RouteTable::banking();
    assert!(table.lookup("/vault").is_none());
}

#[test]
fn lookup_ignores_query_string() {
    let table = RouteTable::banking();
    assert_eq!(table.lookup("/transfer?to=C9").map(|r| r.pattern), Some("/transfer"));
}
