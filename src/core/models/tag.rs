//! Tag model
//!
//! A label applicable to documents. A tag may carry a due date, which seeds
//! the due date of validation tasks created with it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TagId;

/// A tag for categorizing documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    pub id: TagId,

    /// Display name (e.g. "urgent")
    pub name: String,

    /// Default due date for tasks created with this tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Tag {
    /// Create a tag without a due date
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            due_date: None,
        }
    }

    /// Set the due date
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
