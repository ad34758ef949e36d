//! User self-service handlers — profile viewing and updates.

use axum::Json;
use axum::extract::State;

use validator::Validate;

use classhub_core::error::AppError;
use classhub_service::account;

use crate::dto::request::UpdateProfileRequest;
use crate::error::ApiError;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.account_service.get_profile(auth.context()).await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .account_service
        .update_profile(
            auth.context(),
            account::UpdateProfileRequest {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                phone: req.phone,
                password: req.password,
                repeat_password: req.repeat_password,
                user_type: req.user_type,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
