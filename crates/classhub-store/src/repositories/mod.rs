//! Repository implementations, one per entity.

pub mod course;
pub mod post;
pub mod user;
