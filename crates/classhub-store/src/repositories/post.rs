//! Post repository implementation.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use classhub_core::result::AppResult;
use classhub_entity::post::model::CreatePost;
use classhub_entity::post::Post;

/// Repository for post creation and feed queries.
#[derive(Debug, Default)]
pub struct PostRepository {
    posts: DashMap<Uuid, Post>,
}

impl PostRepository {
    /// Create an empty post repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new post.
    pub async fn create(&self, create: CreatePost) -> AppResult<Post> {
        let post = Post {
            id: Uuid::new_v4(),
            content: create.content,
            author_id: create.author_id,
            course_id: create.course_id,
            created_at: Utc::now(),
        };

        self.posts.insert(post.id, post.clone());
        Ok(post)
    }

    /// List the posts visible to a user: everything they authored plus
    /// everything posted into the given courses. Newest first.
    pub async fn find_visible(&self, author_id: Uuid, course_ids: &[Uuid]) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| {
                p.author_id == author_id
                    || p.course_id.is_some_and(|cid| course_ids.contains(&cid))
            })
            .map(|p| p.clone())
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    /// Delete every post belonging to a course. Returns the number removed.
    pub async fn delete_by_course(&self, course_id: Uuid) -> AppResult<u64> {
        // Counted inside the sweep; a len() snapshot would race with
        // concurrent inserts.
        let mut removed = 0u64;
        self.posts.retain(|_, p| {
            if p.course_id == Some(course_id) {
                removed += 1;
                false
            } else {
                true
            }
        });
        Ok(removed)
    }
}
