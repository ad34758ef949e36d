//! Access policy evaluation — every allow/deny decision in one place.

use classhub_core::error::AppError;
use classhub_entity::course::Course;
use classhub_entity::user::UserRole;

use super::action::{Action, Actor};

/// Evaluates the role/ownership/membership rules for every privileged
/// action. The rule list is ordered; the first matching rule wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates the policy.
    pub fn new() -> Self {
        Self
    }

    /// Decides whether the actor may perform the action.
    pub fn can_perform(&self, actor: &Actor, action: &Action<'_>) -> bool {
        match action {
            // A no-op role resubmission is always fine; an actual change
            // requires the actor to currently hold the staff role.
            Action::ChangeRole { requested } => {
                *requested == actor.role || actor.role == UserRole::Staff
            }
            Action::CreateCourse => actor.role == UserRole::Staff,
            Action::UpdateCourse { course } | Action::DeleteCourse { course } => {
                actor.role == UserRole::Staff && course.is_owner(actor.id)
            }
            Action::InviteToCourse { course } => {
                actor.role == UserRole::Staff && course.is_owner(actor.id)
            }
            Action::EnrollInCourse => actor.role == UserRole::Student,
            Action::BrowseCatalog => actor.role == UserRole::Student,
            Action::CreatePost { course: Some(course) } => match actor.role {
                UserRole::Student => course.is_enrolled(actor.id),
                UserRole::Staff => course.is_owner(actor.id),
            },
            // The general feed is open to every authenticated user.
            Action::CreatePost { course: None } => true,
        }
    }

    /// Decides whether the actor may perform the action, turning a denial
    /// into an authorization error.
    pub fn authorize(&self, actor: &Actor, action: &Action<'_>) -> Result<(), AppError> {
        if self.can_perform(actor, action) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{}' is not permitted to {}",
                actor.role,
                action.describe()
            )))
        }
    }

    /// Decides whether a course appears in the actor's scoped listings:
    /// staff see the courses they created, students the courses they are
    /// enrolled in.
    pub fn can_view_course(&self, actor: &Actor, course: &Course) -> bool {
        match actor.role {
            UserRole::Staff => course.is_owner(actor.id),
            UserRole::Student => course.is_enrolled(actor.id),
        }
    }
}
