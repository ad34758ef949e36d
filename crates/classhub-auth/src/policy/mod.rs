//! Centralized access policy.
//!
//! Every privileged operation is described as an [`Action`] and decided in
//! one place, [`AccessPolicy`]. Services never compare roles inline; they
//! build the action and ask the policy.

pub mod action;
pub mod engine;

pub use action::{Action, Actor};
pub use engine::AccessPolicy;
