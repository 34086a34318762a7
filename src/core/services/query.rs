//! Task listing: filters, search and summary rows
//!
//! Filtering runs over tasks that already passed the visibility policy, so a
//! query can only narrow what a requester sees.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{DocumentId, TagId, TaskId, TaskStatus, UserId, ValidationTask};
use crate::core::ports::Backend;

/// Filters and search over validation tasks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQuery {
    /// Only tasks with this status
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Only tasks assigned to this user
    #[serde(default)]
    pub assigned_to: Option<UserId>,
    /// Only tasks created by this user
    #[serde(default)]
    pub created_by: Option<UserId>,
    /// Only tasks with this tag
    #[serde(default)]
    pub tag: Option<TagId>,
    /// Only tasks linked to this document
    #[serde(default)]
    pub document: Option<DocumentId>,
    /// Only tasks due on or before this date
    #[serde(default)]
    pub due_before: Option<NaiveDate>,
    /// Case-insensitive substring over note, assignee username and tag name
    #[serde(default)]
    pub search: Option<String>,
}

impl TaskQuery {
    /// Whether the query has no filters at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a task passes every filter
    #[must_use]
    pub fn matches(&self, task: &ValidationTask, names: &NameIndex) -> bool {
        if self.status.is_some_and(|s| task.status != s)
            || self.assigned_to.is_some_and(|u| task.assigned_to != u)
            || self.created_by.is_some_and(|u| task.created_by != u)
            || self.tag.is_some_and(|t| task.tag != Some(t))
            || self.document.is_some_and(|d| !task.documents.contains(&d))
        {
            return false;
        }

        if let Some(limit) = self.due_before
            && task.due_date.is_none_or(|due| due > limit)
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                task.note.to_lowercase().contains(&term)
                    || names.username(task.assigned_to).is_some_and(|n| n.to_lowercase().contains(&term))
                    || task
                        .tag
                        .and_then(|t| names.tag_name(t))
                        .is_some_and(|n| n.to_lowercase().contains(&term))
            },
            _ => true,
        }
    }

    /// Apply the query and order newest first
    #[must_use]
    pub fn apply(&self, tasks: Vec<ValidationTask>, names: &NameIndex) -> Vec<ValidationTask> {
        let mut tasks: Vec<ValidationTask> =
            tasks.into_iter().filter(|t| self.matches(t, names)).collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        tasks
    }
}

/// Display names for the users and tags referenced by a set of tasks
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    users: HashMap<UserId, String>,
    tags: HashMap<TagId, String>,
}

impl NameIndex {
    /// Resolve every user and tag referenced by `tasks`
    ///
    /// Users and tags are each fetched with one batch lookup. References that
    /// no longer resolve are left out.
    pub fn load(backend: &Backend<'_>, tasks: &[ValidationTask]) -> anyhow::Result<Self> {
        let user_ids: BTreeSet<UserId> =
            tasks.iter().flat_map(|t| [t.assigned_to, t.created_by]).collect();
        let tag_ids: BTreeSet<TagId> = tasks.iter().filter_map(|t| t.tag).collect();

        let mut index = Self::default();
        if !user_ids.is_empty() {
            let ids: Vec<UserId> = user_ids.into_iter().collect();
            for user in backend.users.get_many(&ids)? {
                index.users.insert(user.id, user.username);
            }
        }
        if !tag_ids.is_empty() {
            let ids: Vec<TagId> = tag_ids.into_iter().collect();
            for tag in backend.tags.get_many(&ids)? {
                index.tags.insert(tag.id, tag.name);
            }
        }
        Ok(index)
    }

    /// Register a username
    pub fn insert_user(&mut self, id: UserId, username: impl Into<String>) {
        self.users.insert(id, username.into());
    }

    /// Register a tag name
    pub fn insert_tag(&mut self, id: TagId, name: impl Into<String>) {
        self.tags.insert(id, name.into());
    }

    /// Username for a user id
    #[must_use]
    pub fn username(&self, id: UserId) -> Option<&str> {
        self.users.get(&id).map(String::as_str)
    }

    /// Name for a tag id
    #[must_use]
    pub fn tag_name(&self, id: TagId) -> Option<&str> {
        self.tags.get(&id).map(String::as_str)
    }
}

/// One row of a task listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Task id
    pub id: TaskId,
    /// Tag name, if the task has a tag
    pub tag: Option<String>,
    /// Assignee username
    pub assigned_to: String,
    /// Due date snapshot
    pub due_date: Option<NaiveDate>,
    /// Current status
    pub status: TaskStatus,
    /// Creator username
    pub created_by: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Number of linked documents
    pub documents_count: usize,
    /// Linked document ids
    pub documents: Vec<DocumentId>,
    /// Free-text note
    pub note: String,
}

impl TaskSummary {
    /// Build a summary row, falling back to `#id` for unresolved users
    #[must_use]
    pub fn from_task(task: &ValidationTask, names: &NameIndex) -> Self {
        let user_label = |id: UserId| names.username(id).map_or_else(|| format!("#{id}"), String::from);
        Self {
            id: task.id,
            tag: task
                .tag
                .map(|t| names.tag_name(t).map_or_else(|| format!("#{t}"), String::from)),
            assigned_to: user_label(task.assigned_to),
            due_date: task.due_date,
            status: task.status,
            created_by: user_label(task.created_by),
            created_at: task.created_at,
            documents_count: task.documents_count(),
            documents: task.documents.iter().copied().collect(),
            note: task.note.clone(),
        }
    }
}
