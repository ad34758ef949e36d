//! The vocabulary of the access policy: who is acting, and what they ask for.

use uuid::Uuid;

use classhub_entity::course::Course;
use classhub_entity::user::UserRole;

/// The authenticated identity a policy decision is made for.
///
/// The role is the actor's current role as stored, not whatever a token
/// may have carried at issuance time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// The acting user's ID.
    pub id: Uuid,
    /// The acting user's current role.
    pub role: UserRole,
}

impl Actor {
    /// Create an actor.
    pub fn new(id: Uuid, role: UserRole) -> Self {
        Self { id, role }
    }
}

/// A privileged operation submitted to the policy.
///
/// Variants borrow the resources the decision depends on. Existence and
/// duplicate checks are not the policy's concern; callers resolve those
/// before and after asking for the decision.
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    /// Set the actor's own role to the requested value.
    ChangeRole {
        /// The role the actor asks to hold.
        requested: UserRole,
    },
    /// Create a new course owned by the actor.
    CreateCourse,
    /// Rename an existing course.
    UpdateCourse {
        /// The course being modified.
        course: &'a Course,
    },
    /// Delete an existing course and its posts.
    DeleteCourse {
        /// The course being deleted.
        course: &'a Course,
    },
    /// Enroll another student into a course.
    InviteToCourse {
        /// The course being invited into.
        course: &'a Course,
    },
    /// Enroll the actor themselves into a course.
    EnrollInCourse,
    /// List every course in the system.
    BrowseCatalog,
    /// Write a post into a course, or into the general feed when `None`.
    CreatePost {
        /// The target course, if any.
        course: Option<&'a Course>,
    },
}

impl Action<'_> {
    /// Short human-readable description used in denial messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::ChangeRole { .. } => "change role",
            Self::CreateCourse => "create a course",
            Self::UpdateCourse { .. } => "update this course",
            Self::DeleteCourse { .. } => "delete this course",
            Self::InviteToCourse { .. } => "invite into this course",
            Self::EnrollInCourse => "enroll in a course",
            Self::BrowseCatalog => "browse the course catalog",
            Self::CreatePost { .. } => "post into this course",
        }
    }
}
