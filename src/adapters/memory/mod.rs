//! In-memory backend
//!
//! Implements every port over process-local collections. Used by embedders
//! that keep their own persistence and by the test suite.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::core::models::{
    Document, DocumentId, NewTask, Tag, TagId, TaskId, User, UserId, ValidationTask,
};
use crate::core::ports::{Backend, DocumentStore, TagStore, TaskStore, UserDirectory};

/// A backend holding everything in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    users: Mutex<BTreeMap<UserId, User>>,
    tags: Mutex<BTreeMap<TagId, Tag>>,
    documents: Mutex<BTreeMap<DocumentId, Document>>,
    tasks: Mutex<BTreeMap<TaskId, ValidationTask>>,
    requester: Mutex<Option<UserId>>,
    saves: Mutex<usize>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user
    #[must_use]
    pub fn with_user(self, user: User) -> Self {
        self.insert_user(user);
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(self, tag: Tag) -> Self {
        self.insert_tag(tag);
        self
    }

    /// Add a document
    #[must_use]
    pub fn with_document(self, document: Document) -> Self {
        self.insert_document(document);
        self
    }

    /// Insert or replace a user
    pub fn insert_user(&self, user: User) {
        lock(&self.users).insert(user.id, user);
    }

    /// Insert or replace a tag
    pub fn insert_tag(&self, tag: Tag) {
        lock(&self.tags).insert(tag.id, tag);
    }

    /// Insert or replace a document
    pub fn insert_document(&self, document: Document) {
        lock(&self.documents).insert(document.id, document);
    }

    /// Set the user returned by [`UserDirectory::current_requester`]
    pub fn set_requester(&self, id: Option<UserId>) {
        *lock(&self.requester) = id;
    }

    /// Snapshot of a document
    #[must_use]
    pub fn document(&self, id: DocumentId) -> Option<Document> {
        lock(&self.documents).get(&id).cloned()
    }

    /// Snapshot of every stored task
    #[must_use]
    pub fn tasks(&self) -> Vec<ValidationTask> {
        lock(&self.tasks).values().cloned().collect()
    }

    /// Number of document saves performed so far
    #[must_use]
    pub fn document_saves(&self) -> usize {
        *lock(&self.saves)
    }

    /// Borrow this backend as a port bundle
    #[must_use]
    pub fn backend(&self) -> Backend<'_> {
        Backend {
            documents: self,
            users: self,
            tags: self,
            tasks: self,
        }
    }
}

impl DocumentStore for MemoryBackend {
    fn find_by_ids(&self, ids: &[DocumentId]) -> anyhow::Result<Vec<Document>> {
        let documents = lock(&self.documents);
        Ok(ids.iter().filter_map(|id| documents.get(id).cloned()).collect())
    }

    fn save(&self, document: &Document) -> anyhow::Result<()> {
        lock(&self.documents).insert(document.id, document.clone());
        *lock(&self.saves) += 1;
        Ok(())
    }
}

impl UserDirectory for MemoryBackend {
    fn get(&self, id: UserId) -> anyhow::Result<Option<User>> {
        Ok(lock(&self.users).get(&id).cloned())
    }

    fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(lock(&self.users).values().find(|u| u.username == username).cloned())
    }

    fn current_requester(&self) -> anyhow::Result<Option<User>> {
        let requester = *lock(&self.requester);
        match requester {
            Some(id) => UserDirectory::get(self, id),
            None => Ok(None),
        }
    }
}

impl TagStore for MemoryBackend {
    fn get(&self, id: TagId) -> anyhow::Result<Option<Tag>> {
        Ok(lock(&self.tags).get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Tag>> {
        Ok(lock(&self.tags).values().find(|t| t.name == name).cloned())
    }
}

impl TaskStore for MemoryBackend {
    fn insert(&self, task: NewTask) -> anyhow::Result<ValidationTask> {
        let mut tasks = lock(&self.tasks);
        let next = tasks.keys().next_back().map_or(1, |id| id.0 + 1);
        let task = task.into_task(TaskId(next), Utc::now());
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    fn list(&self) -> anyhow::Result<Vec<ValidationTask>> {
        Ok(self.tasks())
    }

    fn update(&self, task: &ValidationTask) -> anyhow::Result<()> {
        let mut tasks = lock(&self.tasks);
        let Some(slot) = tasks.get_mut(&task.id) else {
            anyhow::bail!("Task not found: {}", task.id);
        };
        *slot = task.clone();
        Ok(())
    }

    fn get(&self, id: TaskId) -> anyhow::Result<Option<ValidationTask>> {
        Ok(lock(&self.tasks).get(&id).cloned())
    }
}
