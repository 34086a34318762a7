//! Task visibility policy
//!
//! Row-level permission rules for validation tasks, expressed as pure
//! predicates over `(requester, task)` so they can be evaluated without a
//! store.
//!
//! | Role      | Sees                               | May create |
//! |-----------|------------------------------------|------------|
//! | Superuser | every task                         | yes        |
//! | Staff     | tasks they created or are assigned | yes        |
//! | Basic     | nothing                            | no         |

use serde::{Deserialize, Serialize};

use crate::core::models::{User, ValidationTask};

/// Group name that grants the staff role unless configured otherwise
pub const DEFAULT_STAFF_GROUP: &str = "Staff";

/// Privilege tier of a requester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Elevated privilege, no row-level restrictions
    Superuser,
    /// Scoped to self-created or self-assigned tasks
    Staff,
    /// No task access
    Basic,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Superuser => write!(f, "superuser"),
            Self::Staff => write!(f, "staff"),
            Self::Basic => write!(f, "basic"),
        }
    }
}

/// Visibility and permission rules for validation tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityPolicy {
    staff_group: String,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_STAFF_GROUP)
    }
}

impl VisibilityPolicy {
    /// Create a policy where membership in `staff_group` grants the staff role
    #[must_use]
    pub fn new(staff_group: impl Into<String>) -> Self {
        Self {
            staff_group: staff_group.into(),
        }
    }

    /// The group that grants the staff role
    #[must_use]
    pub fn staff_group(&self) -> &str {
        &self.staff_group
    }

    /// Classify a requester. Superuser wins over group membership.
    #[must_use]
    pub fn role(&self, requester: &User) -> Role {
        if requester.is_superuser {
            Role::Superuser
        } else if requester.in_group(&self.staff_group) {
            Role::Staff
        } else {
            Role::Basic
        }
    }

    /// Whether the requester may see the task
    #[must_use]
    pub fn is_visible(&self, requester: &User, task: &ValidationTask) -> bool {
        match self.role(requester) {
            Role::Superuser => true,
            Role::Staff => task.involves(requester.id),
            Role::Basic => false,
        }
    }

    /// Keep only the tasks the requester may see, preserving order
    #[must_use]
    pub fn filter_visible(&self, requester: &User, tasks: Vec<ValidationTask>) -> Vec<ValidationTask> {
        tasks.into_iter().filter(|t| self.is_visible(requester, t)).collect()
    }

    /// Whether the requester may create validation tasks
    #[must_use]
    pub fn can_create(&self, requester: &User) -> bool {
        matches!(self.role(requester), Role::Superuser | Role::Staff)
    }

    /// Whether the requester may change the task's status
    ///
    /// Same rule as visibility: superusers always, staff only on tasks they
    /// created or are assigned to.
    #[must_use]
    pub fn can_change_status(&self, requester: &User, task: &ValidationTask) -> bool {
        self.is_visible(requester, task)
    }
}
