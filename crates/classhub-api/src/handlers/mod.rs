//! Route handlers organized by domain.

pub mod auth;
pub mod course;
pub mod health;
pub mod post;
pub mod user;
