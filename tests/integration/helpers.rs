//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use classhub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with a fresh in-memory store
    pub fn new() -> Self {
        let config = AppConfig::default();

        let state = classhub_api::build_state(config.clone());
        let router = classhub_api::build_app(state);

        Self { router, config }
    }

    /// Sign up an account and assert it was created
    pub async fn signup(&self, first_name: &str, email: &str, user_type: &str) {
        let response = self
            .request(
                "POST",
                "/api/signup",
                Some(serde_json::json!({
                    "first_name": first_name,
                    "last_name": "Tester",
                    "email": email,
                    "phone": "555-0100",
                    "password": "password123",
                    "repeat_password": "password123",
                    "user_type": user_type,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Signup failed: {:?}",
            response.body
        );
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": "password123",
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Sign up an account and return a session token for it
    pub async fn signup_and_login(&self, first_name: &str, email: &str, user_type: &str) -> String {
        self.signup(first_name, email, user_type).await;
        self.login(email).await
    }

    /// Create a course as the given staff token, returning its id
    pub async fn create_course(&self, token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/courses",
                Some(serde_json::json!({ "course_name": name })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Course creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No course id in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The stable machine-readable error code, if this is an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or("")
    }
}
