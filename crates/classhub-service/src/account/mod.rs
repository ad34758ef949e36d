//! Account services: registration, login, and profile self-service.

pub mod service;

pub use service::{AccountService, RegisterRequest, UpdateProfileRequest};
