//! Session identity: who is signed in and with which role

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role chosen on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Approves or rejects requests
    Admin,
    /// Submits requests on behalf of students
    Manager,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
        }
    }

    pub fn dashboard_title(&self) -> &'static str {
        match self {
            Role::Admin => "Admin Dashboard",
            Role::Manager => "Manager Dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            other => Err(format!("unknown role '{}' (expected admin or manager)", other)),
        }
    }
}

/// The signed-in user. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub username: String,
}

impl Session {
    pub fn new(role: Role, username: impl Into<String>) -> Self {
        Self {
            role,
            username: username.into(),
        }
    }
}
