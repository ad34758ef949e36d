//! Course repository implementation.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_entity::course::model::CreateCourse;
use classhub_entity::course::Course;

/// Repository for course CRUD, enrollment, and query operations.
#[derive(Debug, Default)]
pub struct CourseRepository {
    courses: DashMap<Uuid, Course>,
}

impl CourseRepository {
    /// Create an empty course repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a course by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Course>> {
        Ok(self.courses.get(&id).map(|c| c.clone()))
    }

    /// Insert a new course with an empty enrollment list.
    pub async fn create(&self, create: CreateCourse) -> AppResult<Course> {
        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            name: create.name,
            created_by: create.created_by,
            enrolled: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.courses.insert(course.id, course.clone());
        Ok(course)
    }

    /// Rename a course.
    pub async fn rename(&self, id: Uuid, name: String) -> AppResult<Course> {
        let mut course = self
            .courses
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Course {id} not found")))?;

        course.name = name;
        course.updated_at = Utc::now();
        Ok(course.clone())
    }

    /// Delete a course. Returns `true` if the course existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.courses.remove(&id).is_some())
    }

    /// Append a user to a course's enrollment list.
    ///
    /// The append is atomic on the course document: the duplicate check and
    /// the push happen under the same entry lock.
    pub async fn enroll(&self, course_id: Uuid, user_id: Uuid) -> AppResult<Course> {
        let mut course = self
            .courses
            .get_mut(&course_id)
            .ok_or_else(|| AppError::not_found(format!("Course {course_id} not found")))?;

        if course.enrolled.contains(&user_id) {
            return Err(AppError::already_enrolled(
                "User is already enrolled in this course",
            ));
        }

        course.enrolled.push(user_id);
        course.updated_at = Utc::now();
        Ok(course.clone())
    }

    /// List every course, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<Course>> {
        let mut courses: Vec<Course> = self.courses.iter().map(|c| c.clone()).collect();
        courses.sort_by_key(|c| (c.created_at, c.id));
        Ok(courses)
    }
}
