//! Auth handlers — signup and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use classhub_core::error::AppError;
use classhub_service::account::RegisterRequest;

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .account_service
        .register(RegisterRequest {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            password: req.password,
            repeat_password: req.repeat_password,
            user_type: req.user_type,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (user, issued) = state
        .account_service
        .authenticate(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: UserResponse::from(user),
    })))
}
