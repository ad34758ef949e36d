//! Course services: lifecycle, enrollment, and scoped listings.

pub mod service;

pub use service::CourseService;
