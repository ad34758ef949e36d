//! # classhub-service
//!
//! Business logic services for ClassHub. Services orchestrate repositories,
//! the password components, and the access policy; the HTTP layer stays a
//! thin shell over them.

pub mod account;
pub mod context;
pub mod course;
pub mod post;

pub use account::AccountService;
pub use context::RequestContext;
pub use course::CourseService;
pub use post::PostService;
