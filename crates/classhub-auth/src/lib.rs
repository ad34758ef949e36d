//! # classhub-auth
//!
//! Authentication and authorization for ClassHub.
//!
//! ## Modules
//!
//! - `jwt` — JWT session token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `policy` — the centralized access policy deciding every privileged action

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{AccessPolicy, Action, Actor};
