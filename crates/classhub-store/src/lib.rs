//! # classhub-store
//!
//! In-memory document store for ClassHub. One repository per entity,
//! backed by concurrent maps. Every mutation touches a single document,
//! so each operation is atomic on its own. Methods are async and return
//! [`classhub_core::AppResult`] so a database-backed implementation could
//! be swapped in without changing the service layer.

pub mod repositories;

pub use repositories::course::CourseRepository;
pub use repositories::post::PostRepository;
pub use repositories::user::UserRepository;
