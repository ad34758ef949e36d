//! Course entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A course owned by a staff member.
///
/// The enrolled list holds student IDs and never contains duplicates;
/// enrollment is append-only through the repository. The creating staff
/// member is not a member of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: Uuid,
    /// Display name of the course.
    pub name: String,
    /// The staff member who created the course.
    pub created_by: Uuid,
    /// IDs of enrolled students.
    pub enrolled: Vec<Uuid>,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Check if the given user created this course.
    pub fn is_owner(&self, user_id: Uuid) -> bool {
        self.created_by == user_id
    }

    /// Check if the given user is enrolled in this course.
    pub fn is_enrolled(&self, user_id: Uuid) -> bool {
        self.enrolled.contains(&user_id)
    }
}

/// Data required to create a new course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    /// Display name of the course.
    pub name: String,
    /// The creating staff member.
    pub created_by: Uuid,
}
