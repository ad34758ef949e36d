//! # classhub-entity
//!
//! Domain entity models for ClassHub. Every struct in this crate
//! represents a stored document or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod course;
pub mod post;
pub mod user;
