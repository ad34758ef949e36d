//! Request context carrying the authenticated user for the current request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use classhub_auth::policy::Actor;
use classhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer after verifying the session token and re-loading
/// the account, so the role is always the stored one, and passed into every
/// service method so that each operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's current role as stored.
    pub role: UserRole,
    /// The user's current email.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, email: String) -> Self {
        Self {
            user_id,
            role,
            email,
            request_time: Utc::now(),
        }
    }

    /// The policy actor for this request.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.role)
    }

    /// Returns whether the current user holds the staff role.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}
