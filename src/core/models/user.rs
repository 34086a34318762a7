//! User model
//!
//! Users come from an external directory. Only the attributes that drive
//! permission decisions are modelled here.

use serde::{Deserialize, Serialize};

use super::UserId;

/// A user known to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Directory identifier
    pub id: UserId,

    /// Login name, unique within the directory
    pub username: String,

    /// Elevated privilege: bypasses every row-level check
    #[serde(default)]
    pub is_superuser: bool,

    /// Group memberships by name (e.g. "Staff")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

impl User {
    /// Create a plain user with no groups
    #[must_use]
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            is_superuser: false,
            groups: Vec::new(),
        }
    }

    /// Create a superuser
    #[must_use]
    pub fn superuser(id: u64, username: impl Into<String>) -> Self {
        Self {
            is_superuser: true,
            ..Self::new(id, username)
        }
    }

    /// Add a group membership
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
        self
    }

    /// Whether the user belongs to the named group
    #[must_use]
    pub fn in_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g == name)
    }
}
