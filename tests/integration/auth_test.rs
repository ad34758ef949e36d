//! Integration tests for signup, login, and session token handling.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_signup_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/signup",
            Some(serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100",
                "password": "password123",
                "repeat_password": "password123",
                "user_type": "STUDENT",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"], "ada@example.com");
    assert_eq!(response.body["data"]["user_type"], "STUDENT");
    // The password hash never leaves the server.
    assert!(response.body["data"].get("password_hash").is_none());
    assert!(response.body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = helpers::TestApp::new();
    app.signup("First", "dup@example.com", "STUDENT").await;

    let response = app
        .request(
            "POST",
            "/api/signup",
            Some(serde_json::json!({
                "first_name": "Second",
                "last_name": "Tester",
                "email": "DUP@example.com",
                "phone": "555-0100",
                "password": "password123",
                "repeat_password": "password123",
                "user_type": "STUDENT",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/signup",
            Some(serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "mismatch@example.com",
                "phone": "555-0100",
                "password": "password123",
                "repeat_password": "different456",
                "user_type": "STUDENT",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "PASSWORD_MISMATCH");
}

#[tokio::test]
async fn test_signup_invalid_role() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/signup",
            Some(serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "role@example.com",
                "phone": "555-0100",
                "password": "password123",
                "repeat_password": "password123",
                "user_type": "PROFESSOR",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_ROLE");
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.signup("Ada", "login@example.com", "STAFF").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "login@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].as_str().is_some());
    assert!(response.body["data"]["expires_at"].as_str().is_some());
    assert_eq!(response.body["data"]["user"]["email"], "login@example.com");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();
    app.signup("Ada", "known@example.com", "STUDENT").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "known@example.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "unknown@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.error_code(), "INVALID_CREDENTIALS");
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/profile", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "MISSING_TOKEN");
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/profile", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "INVALID_TOKEN");
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let app = helpers::TestApp::new();
    app.signup("Ada", "expired@example.com", "STUDENT").await;

    // Craft a token signed with the app's secret but already past expiry.
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": uuid::Uuid::new_v4(),
        "email": "expired@example.com",
        "iat": now - 7200,
        "exp": now - 1,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(app.config.auth.jwt_secret.as_bytes()),
    )
    .unwrap();

    let response = app.request("GET", "/api/profile", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "EXPIRED_TOKEN");
}

#[tokio::test]
async fn test_profile_round_trip() {
    let app = helpers::TestApp::new();
    let token = app
        .signup_and_login("Ada", "roundtrip@example.com", "STAFF")
        .await;

    let response = app.request("GET", "/api/profile", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "roundtrip@example.com");
    assert_eq!(response.body["data"]["user_type"], "STAFF");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
