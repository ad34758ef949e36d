//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the authorization policy.
///
/// Every account holds exactly one role. `Staff` creates and manages
/// courses; `Student` enrolls in them and posts into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Can browse the catalog, enroll in courses, and post into
    /// enrolled courses.
    Student,
    /// Can create courses and manage the courses they created.
    Staff,
}

impl UserRole {
    /// Check if this role is staff.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff)
    }

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Staff => "STAFF",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = classhub_core::AppError;

    /// Parse a wire role string. Matching is exact: lowercase or mixed-case
    /// inputs are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(Self::Student),
            "STAFF" => Ok(Self::Staff),
            _ => Err(classhub_core::AppError::invalid_role(format!(
                "Invalid user role: '{s}'. Expected one of: STUDENT, STAFF"
            ))),
        }
    }
}
