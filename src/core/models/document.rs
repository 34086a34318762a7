//! Document model
//!
//! Documents are owned by the external document store. The workflow only
//! reads them and adds tags.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{DocumentId, TagId};

/// A stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,

    /// Document title
    #[serde(default)]
    pub title: String,

    /// Tags applied to this document
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<TagId>,
}

impl Document {
    /// Create an untagged document
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Whether the document carries the tag
    #[must_use]
    pub fn has_tag(&self, tag: TagId) -> bool {
        self.tags.contains(&tag)
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn add_tag(&mut self, tag: TagId) -> bool {
        self.tags.insert(tag)
    }
}
