//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message posted by a user, either into a course or the general feed.
///
/// Posts are immutable once created; there is no update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// Free-text body of the post.
    pub content: String,
    /// The user who wrote the post.
    pub author_id: Uuid,
    /// The course the post belongs to, or `None` for the general feed.
    pub course_id: Option<Uuid>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Check if the post belongs to the general feed rather than a course.
    pub fn is_general(&self) -> bool {
        self.course_id.is_none()
    }
}

/// Data required to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Free-text body of the post.
    pub content: String,
    /// The authoring user.
    pub author_id: Uuid,
    /// Target course, or `None` for the general feed.
    pub course_id: Option<Uuid>,
}
