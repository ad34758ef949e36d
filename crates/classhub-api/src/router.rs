//! Route definitions for the ClassHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the route table without any middleware layers.
///
/// Layering happens in [`crate::app::build_app`] so tests can mount the
/// bare routes.
pub fn build_routes() -> Router<AppState> {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(course_routes())
        .merge(post_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes)
}

/// Account endpoints: signup, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::user::get_profile))
        .route("/profile", put(handlers::user::update_profile))
}

/// Course lifecycle, listings, and enrollment
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(handlers::course::create))
        .route("/courses", get(handlers::course::list))
        .route("/courses/all", get(handlers::course::catalog))
        .route("/courses/{id}", put(handlers::course::rename))
        .route("/courses/{id}", delete(handlers::course::remove))
        .route("/courses/{id}/invite", post(handlers::course::invite))
        .route("/courses/{id}/enroll", post(handlers::course::enroll))
}

/// Post endpoints
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(handlers::post::create))
        .route("/posts", get(handlers::post::list))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
