use super::*;

// =============================================================
// Error-message extraction
// =============================================================

#[test]
fn error_message_prefers_message_over_detail() {
    let body = r#"{"message":"Account already exists","detail":"conflict"}"#;
    assert_eq!(error_message(409, body), "Account already exists");
}

#[test]
fn error_message_falls_back_to_detail() {
    let body = r#"{"detail":"Invalid password"}"#;
    assert_eq!(error_message(401, body), "Invalid password");
}

#[test]
fn error_message_uses_status_for_opaque_bodies() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed with status 502");
    assert_eq!(error_message(500, ""), "request failed with status 500");
    assert_eq!(error_message(400, r#"{"message": 42}"#), "request failed with status 400");
}

// =============================================================
// Auth envelope
// =============================================================

#[test]
fn auth_body_with_token_becomes_a_session() {
    let body: AuthResponse =
        serde_json::from_str(r#"{"access_token":"tok-1","username":"vera"}"#).expect("parses");
    let session = session_from_auth(body).expect("valid session");
    assert_eq!(session.username, "vera");
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.avatar, None);
}

#[test]
fn auth_body_keeps_optional_avatar() {
    let body: AuthResponse = serde_json::from_str(
        r#"{"access_token":"tok-1","username":"vera","avatar":"https://example.test/a.png"}"#,
    )
    .expect("parses");
    let session = session_from_auth(body).expect("valid session");
    assert_eq!(session.avatar.as_deref(), Some("https://example.test/a.png"));
}

#[test]
fn auth_body_without_token_is_rejected() {
    let body: AuthResponse =
        serde_json::from_str(r#"{"access_token":"","username":"vera"}"#).expect("parses");
    assert!(session_from_auth(body).is_err());
}

#[test]
fn balance_body_parses_flat_shape() {
    let body: BalanceResponse = serde_json::from_str(r#"{"balance":250}"#).expect("parses");
    assert_eq!(body.balance, 250);
}

// =============================================================
// URL and form plumbing
// =============================================================

#[test]
fn api_base_defaults_under_the_site_origin() {
    assert_eq!(api_base(), "/api");
}

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/auth/login"), "/api/auth/login");
}

#[test]
fn bearer_formats_the_authorization_value() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[test]
fn form_encode_escapes_reserved_characters() {
    let body = form_encode(&[("username", "vera"), ("password", "p&ss wörd=1")]);
    assert_eq!(body, "username=vera&password=p%26ss+w%C3%B6rd%3D1");
}

#[test]
fn form_encode_keeps_unreserved_characters() {
    assert_eq!(form_encode(&[("k", "a-b_c.d~e")]), "k=a-b_c.d~e");
}
