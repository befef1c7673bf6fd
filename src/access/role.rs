//! Caller roles
//!
//! The dashboard knows exactly two roles. Role is read once per view and is
//! immutable for the lifetime of that view.

use serde::{Deserialize, Serialize};

/// Caller role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator: satisfies every capability requirement without the
    /// permission document ever being consulted
    Admin,
    /// Regular employee: subject to permission gates
    Employee,
}

impl Role {
    /// Whether this role bypasses capability evaluation entirely
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Employee => write!(f, "employee"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
