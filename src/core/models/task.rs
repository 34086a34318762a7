//! Validation task model
//!
//! A validation task is a review assignment over a set of documents. The due
//! date is copied from the tag when the task is created and never re-derived.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{DocumentId, TagId, TaskId, UserId};

/// A review assignment over a set of documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationTask {
    /// Unique identifier (assigned by the task store)
    pub id: TaskId,

    /// Who must carry out the review
    pub assigned_to: UserId,

    /// Who requested the review
    pub created_by: UserId,

    /// Tag applied to every linked document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagId>,

    /// Free-text instructions
    #[serde(default)]
    pub note: String,

    /// Snapshot of the tag's due date at creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Documents under review
    #[serde(default)]
    pub documents: BTreeSet<DocumentId>,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl ValidationTask {
    /// Number of linked documents
    #[must_use]
    pub fn documents_count(&self) -> usize {
        self.documents.len()
    }

    /// Whether the user created or is assigned to this task
    #[must_use]
    pub fn involves(&self, user: UserId) -> bool {
        self.created_by == user || self.assigned_to == user
    }
}

/// A task that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Assignee
    pub assigned_to: UserId,
    /// Creator
    pub created_by: UserId,
    /// Optional tag
    pub tag: Option<TagId>,
    /// Free-text note
    pub note: String,
    /// Due date snapshot
    pub due_date: Option<NaiveDate>,
    /// Linked documents
    pub documents: BTreeSet<DocumentId>,
}

impl NewTask {
    /// Materialize the task with a store-assigned id
    #[must_use]
    pub fn into_task(self, id: TaskId, created_at: DateTime<Utc>) -> ValidationTask {
        ValidationTask {
            id,
            assigned_to: self.assigned_to,
            created_by: self.created_by,
            tag: self.tag,
            note: self.note,
            due_date: self.due_date,
            status: TaskStatus::default(),
            documents: self.documents,
            created_at,
        }
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Waiting for the assignee
    #[default]
    Pending,
    /// Review under way
    InProgress,
    /// Review finished
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pending" | "todo" => Ok(Self::Pending),
            "in_progress" | "inprogress" | "started" => Ok(Self::InProgress),
            "done" | "complete" | "completed" => Ok(Self::Done),
            _ => Err(format!("Invalid status: {s}. Use: pending, in_progress, done")),
        }
    }
}
