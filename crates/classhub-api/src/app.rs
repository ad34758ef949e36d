//! Application wiring: state construction, the layered router, and the
//! server run loop.

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use classhub_auth::jwt::decoder::JwtDecoder;
use classhub_auth::jwt::encoder::JwtEncoder;
use classhub_auth::password::hasher::PasswordHasher;
use classhub_auth::password::validator::PasswordValidator;
use classhub_auth::policy::AccessPolicy;
use classhub_core::config::AppConfig;
use classhub_core::error::AppError;
use classhub_service::account::AccountService;
use classhub_service::course::CourseService;
use classhub_service::post::PostService;
use classhub_store::repositories::course::CourseRepository;
use classhub_store::repositories::post::PostRepository;
use classhub_store::repositories::user::UserRepository;

use crate::middleware;
use crate::router::build_routes;
use crate::state::AppState;

/// Construct the full application state from configuration: repositories,
/// auth components, and services.
pub fn build_state(config: AppConfig) -> AppState {
    let user_repo = Arc::new(UserRepository::new());
    let course_repo = Arc::new(CourseRepository::new());
    let post_repo = Arc::new(PostRepository::new());

    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let access_policy = Arc::new(AccessPolicy::new());

    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&access_policy),
    ));
    let course_service = Arc::new(CourseService::new(
        Arc::clone(&course_repo),
        Arc::clone(&post_repo),
        Arc::clone(&user_repo),
        Arc::clone(&access_policy),
    ));
    let post_service = Arc::new(PostService::new(
        Arc::clone(&post_repo),
        Arc::clone(&course_repo),
        Arc::clone(&access_policy),
    ));

    AppState {
        config: Arc::new(config),
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        password_validator,
        access_policy,
        user_repo,
        course_repo,
        post_repo,
        account_service,
        course_service,
        post_service,
    }
}

/// Build the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    build_routes()
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ClassHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("ClassHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
