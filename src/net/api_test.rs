use super::*;

#[test]
fn login_endpoint_joins_base_url() {
    assert_eq!(login_endpoint("http://localhost:8080"), "http://localhost:8080/login");
    assert_eq!(login_endpoint("https://bank.example/"), "https://bank.example/login");
}

// =============================================================================
// success bodies
// =============================================================================

#[test]
fn success_with_role_and_id_grants() {
    let grant = interpret_login_response(200, r#"{"success":true,"role":"ROLE_USER","customerId":"C42"}"#).unwrap();
    assert_eq!(grant, LoginGrant { role: "ROLE_USER".to_owned(), subject_id: "C42".to_owned() });
}

#[test]
fn numeric_customer_id_is_accepted() {
    let grant = interpret_login_response(200, r#"{"success":true,"role":"ROLE_ADMIN","customerId":7}"#).unwrap();
    assert_eq!(grant.subject_id, "7");
}

#[test]
fn success_without_role_is_invalid() {
    assert_eq!(
        interpret_login_response(200, r#"{"success":true,"customerId":"C42"}"#),
        Err(LoginError::InvalidResponse)
    );
}

#[test]
fn bare_true_is_invalid_without_identity() {
    assert_eq!(interpret_login_response(200, "true"), Err(LoginError::InvalidResponse));
}

#[test]
fn unparseable_body_is_invalid() {
    assert_eq!(interpret_login_response(200, "<html>"), Err(LoginError::InvalidResponse));
}

#[test]
fn success_false_uses_backend_message() {
    assert_eq!(
        interpret_login_response(200, r#"{"success":false,"message":"Account locked."}"#),
        Err(LoginError::Rejected("Account locked.".to_owned()))
    );
}

#[test]
fn success_false_without_message_uses_default() {
    assert_eq!(
        interpret_login_response(200, r#"{"success":false}"#),
        Err(LoginError::Rejected(REJECTED_MESSAGE.to_owned()))
    );
    assert_eq!(interpret_login_response(200, "false"), Err(LoginError::Rejected(REJECTED_MESSAGE.to_owned())));
}

// =============================================================================
// error statuses
// =============================================================================

#[test]
fn unauthorized_prefers_backend_message() {
    let err = interpret_login_response(401, r#"{"success":false,"message":"Invalid Credentials."}"#).unwrap_err();
    assert_eq!(err, LoginError::Status { status: 401, message: "Invalid Credentials.".to_owned() });
    assert_eq!(err.to_string(), "Invalid Credentials.");
}

#[test]
fn unauthorized_without_message_uses_default() {
    assert_eq!(
        interpret_login_response(401, ""),
        Err(LoginError::Status { status: 401, message: UNAUTHORIZED_MESSAGE.to_owned() })
    );
}

#[test]
fn other_status_with_plain_text_body() {
    assert_eq!(
        interpret_login_response(500, "Database offline"),
        Err(LoginError::Status { status: 500, message: "Database offline".to_owned() })
    );
}

#[test]
fn other_status_with_json_string_body() {
    assert_eq!(
        interpret_login_response(400, r#""Password is required.""#),
        Err(LoginError::Status { status: 400, message: "Password is required.".to_owned() })
    );
}

#[test]
fn other_status_without_message_reports_status() {
    assert_eq!(
        interpret_login_response(503, r#"{"error":"unavailable"}"#),
        Err(LoginError::Status { status: 503, message: "Login failed (Status: 503)".to_owned() })
    );
}

#[test]
fn network_error_message_matches_form_text() {
    assert_eq!(LoginError::Network.to_string(), "Network error: Could not reach the server.");
}
