//! Task repository - creates validation tasks and links their documents
//!
//! Creation resolves the requested document ids and persists the task. When
//! a tag is given, every linked document is tagged and saved. Ids that do not
//! resolve are dropped rather than failing the whole call.

use std::collections::BTreeSet;

use anyhow::Context;
use log::{debug, info, warn};
use serde::Serialize;

use crate::core::models::{DocumentId, NewTask, Tag, UserId, ValidationTask};
use crate::core::ports::{DocumentStore, TaskStore};

/// Result of creating a task
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreation {
    /// The persisted task
    pub task: ValidationTask,
    /// Number of documents actually linked
    pub linked: usize,
    /// Requested ids with no matching document
    pub missing: Vec<DocumentId>,
    /// Linked documents that already carried the tag
    pub already_tagged: Vec<DocumentId>,
}

/// Creates and links validation tasks
#[derive(Clone, Copy)]
pub struct TaskRepository<'a> {
    documents: &'a dyn DocumentStore,
    tasks: &'a dyn TaskStore,
}

impl std::fmt::Debug for TaskRepository<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRepository").finish_non_exhaustive()
    }
}

impl<'a> TaskRepository<'a> {
    /// Create a repository over the given stores
    #[must_use]
    pub const fn new(documents: &'a dyn DocumentStore, tasks: &'a dyn TaskStore) -> Self {
        Self { documents, tasks }
    }

    /// Create a task over `document_ids`
    ///
    /// The due date is copied from `tag` if present. Every resolved document
    /// receives `tag` and is saved, including documents that already had it.
    ///
    /// # Errors
    ///
    /// Returns an error if a store call fails. Unresolved ids are not an
    /// error; they are reported in [`TaskCreation::missing`].
    pub fn create_task(
        &self,
        assigned_to: UserId,
        created_by: UserId,
        tag: Option<&Tag>,
        note: &str,
        document_ids: &[DocumentId],
    ) -> anyhow::Result<TaskCreation> {
        let requested: BTreeSet<DocumentId> = document_ids.iter().copied().collect();
        let ids: Vec<DocumentId> = requested.iter().copied().collect();

        debug!("Resolving {} document id(s)", ids.len());
        let mut documents =
            self.documents.find_by_ids(&ids).context("Failed to resolve documents")?;
        documents.retain(|d| requested.contains(&d.id));
        documents.sort_by_key(|d| d.id);
        documents.dedup_by_key(|d| d.id);

        let linked: BTreeSet<DocumentId> = documents.iter().map(|d| d.id).collect();
        let missing: Vec<DocumentId> = requested.difference(&linked).copied().collect();
        if !missing.is_empty() {
            warn!("{} requested document(s) not found: {}", missing.len(), join_ids(&missing));
        }

        let task = self
            .tasks
            .insert(NewTask {
                assigned_to,
                created_by,
                tag: tag.map(|t| t.id),
                note: note.to_string(),
                due_date: tag.and_then(|t| t.due_date),
                documents: linked.clone(),
            })
            .context("Failed to store validation task")?;
        info!(
            "Created validation task {} for {} document(s), assigned to user {}",
            task.id,
            linked.len(),
            assigned_to
        );

        let mut already_tagged = Vec::new();
        if let Some(tag) = tag {
            for mut document in documents {
                if !self.documents.add_tag(&mut document, tag) {
                    already_tagged.push(document.id);
                }
                self.documents
                    .save(&document)
                    .with_context(|| format!("Failed to save document {}", document.id))?;
            }
            if !already_tagged.is_empty() {
                info!(
                    "{} document(s) already tagged '{}': {}",
                    already_tagged.len(),
                    tag.name,
                    join_ids(&already_tagged)
                );
            }
        }

        Ok(TaskCreation {
            task,
            linked: linked.len(),
            missing,
            already_tagged,
        })
    }
}

fn join_ids(ids: &[DocumentId]) -> String {
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
