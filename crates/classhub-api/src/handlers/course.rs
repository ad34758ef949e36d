//! Course handlers — lifecycle, enrollment, and listings.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use classhub_core::error::AppError;

use crate::dto::request::{CreateCourseRequest, InviteRequest, UpdateCourseRequest};
use crate::dto::response::{ApiResponse, CourseResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/courses
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let course = state
        .course_service
        .create(auth.context(), &req.course_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CourseResponse::from(course))),
    ))
}

/// GET /api/courses
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, ApiError> {
    let courses = state.course_service.list(auth.context()).await?;

    Ok(Json(ApiResponse::ok(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}

/// GET /api/courses/all
pub async fn catalog(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, ApiError> {
    let courses = state.course_service.catalog(auth.context()).await?;

    Ok(Json(ApiResponse::ok(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}

/// PUT /api/courses/{id}
pub async fn rename(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let course = state
        .course_service
        .rename(auth.context(), id, &req.course_name)
        .await?;

    Ok(Json(ApiResponse::ok(CourseResponse::from(course))))
}

/// DELETE /api/courses/{id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let posts_removed = state.course_service.delete(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Course deleted along with {posts_removed} post(s)"),
    })))
}

/// POST /api/courses/{id}/invite
pub async fn invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<InviteRequest>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let course = state
        .course_service
        .invite(auth.context(), id, &req.email)
        .await?;

    Ok(Json(ApiResponse::ok(CourseResponse::from(course))))
}

/// POST /api/courses/{id}/enroll
pub async fn enroll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let course = state.course_service.enroll(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(CourseResponse::from(course))))
}
