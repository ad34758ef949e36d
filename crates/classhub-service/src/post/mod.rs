//! Post services: course and general-feed messages.

pub mod service;

pub use service::PostService;
