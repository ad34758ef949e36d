//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use classhub_auth::jwt::decoder::JwtDecoder;
use classhub_auth::jwt::encoder::JwtEncoder;
use classhub_auth::password::hasher::PasswordHasher;
use classhub_auth::password::validator::PasswordValidator;
use classhub_auth::policy::AccessPolicy;
use classhub_core::config::AppConfig;
use classhub_service::account::AccountService;
use classhub_service::course::CourseService;
use classhub_service::post::PostService;
use classhub_store::repositories::course::CourseRepository;
use classhub_store::repositories::post::PostRepository;
use classhub_store::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy validator
    pub password_validator: Arc<PasswordValidator>,
    /// Centralized access policy
    pub access_policy: Arc<AccessPolicy>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Course repository
    pub course_repo: Arc<CourseRepository>,
    /// Post repository
    pub post_repo: Arc<PostRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Account service
    pub account_service: Arc<AccountService>,
    /// Course service
    pub course_service: Arc<CourseService>,
    /// Post service
    pub post_service: Arc<PostService>,
}
