//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Login email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation.
    pub repeat_password: String,
    /// Requested role, `"STUDENT"` or `"STAFF"`.
    pub user_type: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Update profile request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New login email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: Option<String>,
    /// New contact phone number.
    pub phone: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
    /// Confirmation for the new password.
    pub repeat_password: Option<String>,
    /// Requested role.
    pub user_type: Option<String>,
}

/// Create course request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCourseRequest {
    /// Display name of the new course.
    #[validate(length(min = 1, message = "Course name is required"))]
    pub course_name: String,
}

/// Rename course request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    /// New display name.
    #[validate(length(min = 1, message = "Course name is required"))]
    pub course_name: String,
}

/// Invite-a-student request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InviteRequest {
    /// Email of the student to enroll.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}

/// Create post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Free-text body of the post.
    #[validate(length(min = 1, message = "Post content is required"))]
    pub content: String,
    /// Target course; omit for the general feed.
    pub course_id: Option<Uuid>,
}
