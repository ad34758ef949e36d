//! Course operations — creation, management, enrollment, and listings.
//!
//! Existence is always resolved before ownership, so a caller probing a
//! missing course gets a not-found rather than a permission error.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use classhub_auth::policy::{AccessPolicy, Action};
use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_entity::course::model::CreateCourse;
use classhub_entity::course::Course;
use classhub_store::repositories::course::CourseRepository;
use classhub_store::repositories::post::PostRepository;
use classhub_store::repositories::user::UserRepository;

use crate::context::RequestContext;

/// Handles course lifecycle and enrollment operations.
#[derive(Clone)]
pub struct CourseService {
    /// Course repository.
    course_repo: Arc<CourseRepository>,
    /// Post repository, needed for the delete cascade.
    post_repo: Arc<PostRepository>,
    /// User repository, needed to resolve invite targets.
    user_repo: Arc<UserRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(
        course_repo: Arc<CourseRepository>,
        post_repo: Arc<PostRepository>,
        user_repo: Arc<UserRepository>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            course_repo,
            post_repo,
            user_repo,
            policy,
        }
    }

    /// Creates a course owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> AppResult<Course> {
        self.policy.authorize(&ctx.actor(), &Action::CreateCourse)?;

        if name.trim().is_empty() {
            return Err(AppError::validation("Course name is required"));
        }

        let course = self
            .course_repo
            .create(CreateCourse {
                name: name.to_string(),
                created_by: ctx.user_id,
            })
            .await?;

        info!(course_id = %course.id, user_id = %ctx.user_id, "Course created");

        Ok(course)
    }

    /// Lists the courses visible to the caller: created courses for staff,
    /// enrolled courses for students.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Course>> {
        let actor = ctx.actor();
        let courses = self.course_repo.find_all().await?;
        Ok(courses
            .into_iter()
            .filter(|c| self.policy.can_view_course(&actor, c))
            .collect())
    }

    /// Lists every course in the system, for students browsing where to
    /// enroll.
    pub async fn catalog(&self, ctx: &RequestContext) -> AppResult<Vec<Course>> {
        self.policy.authorize(&ctx.actor(), &Action::BrowseCatalog)?;
        self.course_repo.find_all().await
    }

    /// Renames a course owned by the caller.
    pub async fn rename(&self, ctx: &RequestContext, id: Uuid, name: &str) -> AppResult<Course> {
        let course = self
            .course_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        self.policy
            .authorize(&ctx.actor(), &Action::UpdateCourse { course: &course })?;

        if name.trim().is_empty() {
            return Err(AppError::validation("Course name is required"));
        }

        let course = self.course_repo.rename(id, name.to_string()).await?;

        info!(course_id = %course.id, user_id = %ctx.user_id, "Course renamed");

        Ok(course)
    }

    /// Deletes a course owned by the caller along with every post in it.
    ///
    /// Posts are removed first, then the course; a fault between the two
    /// steps can never leave a course pointing at deleted content. Returns
    /// the number of posts removed.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<u64> {
        let course = self
            .course_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        self.policy
            .authorize(&ctx.actor(), &Action::DeleteCourse { course: &course })?;

        let posts_removed = self.post_repo.delete_by_course(id).await?;
        self.course_repo.delete(id).await?;

        info!(
            course_id = %id,
            user_id = %ctx.user_id,
            posts_removed,
            "Course deleted"
        );

        Ok(posts_removed)
    }

    /// Enrolls a student, looked up by email, into a course the caller owns.
    ///
    /// The target must be an existing student account; a staff email or an
    /// unknown one both resolve to not-found so the invite flow leaks
    /// nothing about non-student accounts.
    pub async fn invite(
        &self,
        ctx: &RequestContext,
        course_id: Uuid,
        email: &str,
    ) -> AppResult<Course> {
        let course = self
            .course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        self.policy
            .authorize(&ctx.actor(), &Action::InviteToCourse { course: &course })?;

        let student = self
            .user_repo
            .find_by_email(email)
            .await?
            .filter(|u| !u.is_staff())
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let course = self.course_repo.enroll(course_id, student.id).await?;

        info!(
            course_id = %course.id,
            user_id = %ctx.user_id,
            student_id = %student.id,
            "Student invited"
        );

        Ok(course)
    }

    /// Enrolls the caller into a course.
    pub async fn enroll(&self, ctx: &RequestContext, course_id: Uuid) -> AppResult<Course> {
        self.course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found"))?;

        self.policy.authorize(&ctx.actor(), &Action::EnrollInCourse)?;

        let course = self.course_repo.enroll(course_id, ctx.user_id).await?;

        info!(course_id = %course.id, user_id = %ctx.user_id, "Student enrolled");

        Ok(course)
    }
}
