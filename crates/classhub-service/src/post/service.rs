//! Post operations — writing into courses or the general feed, and the
//! scoped feed listing.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use classhub_auth::policy::{AccessPolicy, Action};
use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_entity::post::model::CreatePost;
use classhub_entity::post::Post;
use classhub_store::repositories::course::CourseRepository;
use classhub_store::repositories::post::PostRepository;

use crate::context::RequestContext;

/// Handles post creation and feed queries.
#[derive(Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Course repository, needed for membership checks and feed scoping.
    course_repo: Arc<CourseRepository>,
    /// Access policy.
    policy: Arc<AccessPolicy>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(
        post_repo: Arc<PostRepository>,
        course_repo: Arc<CourseRepository>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            post_repo,
            course_repo,
            policy,
        }
    }

    /// Writes a post into a course, or into the general feed when no
    /// course is given.
    ///
    /// A course post requires membership: students must be enrolled, staff
    /// must own the course. The course is resolved before the policy runs,
    /// so a missing course is a not-found rather than a denial.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        content: &str,
        course_id: Option<Uuid>,
    ) -> AppResult<Post> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Post content is required"));
        }

        let course = match course_id {
            Some(id) => Some(
                self.course_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Course not found"))?,
            ),
            None => None,
        };

        self.policy.authorize(
            &ctx.actor(),
            &Action::CreatePost {
                course: course.as_ref(),
            },
        )?;

        let post = self
            .post_repo
            .create(CreatePost {
                content: content.to_string(),
                author_id: ctx.user_id,
                course_id,
            })
            .await?;

        info!(
            post_id = %post.id,
            user_id = %ctx.user_id,
            course_id = ?post.course_id,
            "Post created"
        );

        Ok(post)
    }

    /// Lists the posts visible to the caller, newest first: everything they
    /// authored plus everything posted into courses they can view.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Post>> {
        let actor = ctx.actor();
        let visible_courses: Vec<Uuid> = self
            .course_repo
            .find_all()
            .await?
            .into_iter()
            .filter(|c| self.policy.can_view_course(&actor, c))
            .map(|c| c.id)
            .collect();

        self.post_repo
            .find_visible(ctx.user_id, &visible_courses)
            .await
    }
}
