//! Account operations — registration, login, profile viewing and updates.

use std::sync::Arc;

use tracing::info;

use classhub_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use classhub_auth::password::{PasswordHasher, PasswordValidator};
use classhub_auth::policy::{AccessPolicy, Action};
use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_entity::user::model::{CreateUser, UpdateUser};
use classhub_entity::user::{User, UserRole};
use classhub_store::repositories::user::UserRepository;

use crate::context::RequestContext;

/// Handles account lifecycle and self-service operations.
#[derive(Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Session token encoder.
    encoder: Arc<JwtEncoder>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Plaintext password.
    pub password: String,
    /// Password confirmation; must equal `password`.
    pub repeat_password: String,
    /// Requested role as a wire string (`"STUDENT"` or `"STAFF"`).
    pub user_type: String,
}

/// Data for updating the caller's own profile. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfileRequest {
    /// New given name (optional).
    pub first_name: Option<String>,
    /// New family name (optional).
    pub last_name: Option<String>,
    /// New login email (optional).
    pub email: Option<String>,
    /// New contact phone number (optional).
    pub phone: Option<String>,
    /// New plaintext password (optional).
    pub password: Option<String>,
    /// Confirmation for the new password.
    pub repeat_password: Option<String>,
    /// Requested role as a wire string (optional).
    pub user_type: Option<String>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
            policy,
        }
    }

    /// Registers a new account.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        let required = [
            &req.first_name,
            &req.last_name,
            &req.email,
            &req.phone,
            &req.password,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(AppError::validation("All fields are required"));
        }

        self.validator
            .validate_confirmation(&req.password, &req.repeat_password)?;

        let role: UserRole = req.user_type.parse()?;

        self.validator.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(CreateUser {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                phone: req.phone,
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "Account registered");

        Ok(user)
    }

    /// Authenticates an account and issues a session token.
    ///
    /// Unknown email and wrong password fail identically, so callers cannot
    /// probe which addresses are registered.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(User, IssuedToken)> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_credentials("Invalid credentials"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::invalid_credentials("Invalid credentials"));
        }

        let token = self.encoder.generate_token(&user)?;

        info!(user_id = %user.id, "User logged in");

        Ok((user, token))
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile fields.
    ///
    /// A role change is decided by the access policy against the caller's
    /// current role; a password change requires a matching confirmation.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfileRequest,
    ) -> AppResult<User> {
        let mut update = UpdateUser::default();

        if let Some(user_type) = &req.user_type {
            let requested: UserRole = user_type.parse()?;
            self.policy
                .authorize(&ctx.actor(), &Action::ChangeRole { requested })?;
            update.role = Some(requested);
        }

        if req.password.is_some() || req.repeat_password.is_some() {
            let password = req.password.as_deref().unwrap_or("");
            let repeat = req.repeat_password.as_deref().unwrap_or("");
            self.validator.validate_confirmation(password, repeat)?;
            self.validator.validate(password)?;
            update.password_hash = Some(self.hasher.hash_password(password)?);
        }

        if let Some(first_name) = req.first_name {
            if first_name.trim().is_empty() {
                return Err(AppError::validation("First name cannot be empty"));
            }
            update.first_name = Some(first_name);
        }
        if let Some(last_name) = req.last_name {
            if last_name.trim().is_empty() {
                return Err(AppError::validation("Last name cannot be empty"));
            }
            update.last_name = Some(last_name);
        }
        if let Some(email) = req.email {
            if email.trim().is_empty() {
                return Err(AppError::validation("Email cannot be empty"));
            }
            update.email = Some(email);
        }
        if let Some(phone) = req.phone {
            if phone.trim().is_empty() {
                return Err(AppError::validation("Phone cannot be empty"));
            }
            update.phone = Some(phone);
        }

        let user = self.user_repo.update(ctx.user_id, update).await?;

        info!(user_id = %ctx.user_id, "Profile updated");

        Ok(user)
    }
}
