//! Task store port
//!
//! Persistence for validation tasks and their document links.

use super::super::models::{NewTask, TaskId, ValidationTask};

/// Repository for validation tasks
///
/// Implementations assign ids and creation timestamps on insert.
pub trait TaskStore: Send + Sync {
    /// Persist a new task and return it with its id
    fn insert(&self, task: NewTask) -> anyhow::Result<ValidationTask>;

    /// List all tasks
    fn list(&self) -> anyhow::Result<Vec<ValidationTask>>;

    /// Replace a stored task
    ///
    /// Fails if no task with the same id exists.
    fn update(&self, task: &ValidationTask) -> anyhow::Result<()>;

    /// Get a single task
    fn get(&self, id: TaskId) -> anyhow::Result<Option<ValidationTask>> {
        Ok(self.list()?.into_iter().find(|t| t.id == id))
    }
}
