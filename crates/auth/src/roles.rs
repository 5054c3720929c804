use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A principal's authorization class.
///
/// The set is closed: exactly these three members exist, and the set cannot
/// be extended or mutated at runtime. The wire/storage form of each member is
/// its own name in SCREAMING_SNAKE_CASE, so a value crossing a serialization
/// boundary (payload field, persisted record, token claim) round-trips
/// without translation.
///
/// Construction from untrusted input goes through [`FromStr`], which is the
/// only fallible path into the type; once a `Role` exists, no further
/// validation is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative authority over the system.
    SuperAdmin,
    /// Authority to manage instructional content and students.
    Tutor,
    /// Baseline authority; consumer of instructional content.
    Student,
}

/// A string was not a member of the role set.
///
/// Matching is exact: case variants, aliases, and numeric codes are all
/// rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid role: {value:?}")]
pub struct InvalidRoleError {
    /// The rejected input, verbatim.
    pub value: String,
}

impl Role {
    /// Every member of the role set.
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Tutor, Role::Student];

    /// Canonical wire/storage form. Identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Tutor => "TUTOR",
            Role::Student => "STUDENT",
        }
    }

    /// Membership guard for external input.
    pub fn is_valid(value: &str) -> bool {
        value.parse::<Role>().is_ok()
    }

    /// Human-readable meaning, for audit trails and admin UIs.
    pub fn description(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Full administrative authority over the system",
            Role::Tutor => "Manages instructional content and students",
            Role::Student => "Baseline authority; consumes instructional content",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            "TUTOR" => Ok(Role::Tutor),
            "STUDENT" => Ok(Role::Student),
            _ => Err(InvalidRoleError {
                value: s.to_string(),
            }),
        }
    }
}
