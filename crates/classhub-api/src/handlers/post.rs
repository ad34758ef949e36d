//! Post handlers — feed writing and the scoped feed listing.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use classhub_core::error::AppError;

use crate::dto::request::CreatePostRequest;
use crate::dto::response::{ApiResponse, PostResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let post = state
        .post_service
        .create(auth.context(), &req.content, req.course_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(PostResponse::from(post))),
    ))
}

/// GET /api/posts
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<PostResponse>>>, ApiError> {
    let posts = state.post_service.list(auth.context()).await?;

    Ok(Json(ApiResponse::ok(
        posts.into_iter().map(PostResponse::from).collect(),
    )))
}
