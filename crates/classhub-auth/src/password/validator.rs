//! Password policy enforcement for new passwords.

use classhub_core::config::auth::AuthConfig;
use classhub_core::error::AppError;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the configured policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Validates that the password and its confirmation match.
    pub fn validate_confirmation(
        &self,
        password: &str,
        repeat_password: &str,
    ) -> Result<(), AppError> {
        if password != repeat_password {
            return Err(AppError::password_mismatch("Passwords do not match"));
        }
        Ok(())
    }
}
