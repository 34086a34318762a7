//! TOML-backed ports
//!
//! Implements every port over one store file. Each call reads the file and
//! every mutation writes it back, so concurrent writers follow
//! last-write-wins.

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;

use super::store::{StoreFile, load_file, save_file};
use crate::core::models::{
    Document, DocumentId, NewTask, Tag, TagId, TaskId, User, UserId, ValidationTask,
};
use crate::core::ports::{Backend, DocumentStore, TagStore, TaskStore, UserDirectory};

/// Backend stored in a single TOML file
#[derive(Debug, Clone)]
pub struct TomlBackend {
    path: PathBuf,
    requester: Option<String>,
}

impl TomlBackend {
    /// Create a backend over the given store file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            requester: None,
        }
    }

    /// Set the username (or id) of the current requester
    #[must_use]
    pub fn with_requester(mut self, requester: Option<String>) -> Self {
        self.requester = requester;
        self
    }

    /// Username (or id) of the current requester, as given
    #[must_use]
    pub fn requester(&self) -> Option<&str> {
        self.requester.as_deref()
    }

    /// Path of the store file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole store
    pub fn load_store(&self) -> anyhow::Result<StoreFile> {
        debug!("Loading store from {}", self.path.display());
        load_file(&self.path)
    }

    /// Write the whole store
    pub fn save_store(&self, store: &StoreFile) -> anyhow::Result<()> {
        debug!("Writing store to {}", self.path.display());
        save_file(&self.path, store)
    }

    /// Create an empty store file if none exists
    ///
    /// Returns `true` if a file was created.
    pub fn init(&self, force: bool) -> anyhow::Result<bool> {
        if self.path.exists() && !force {
            return Ok(false);
        }
        self.save_store(&StoreFile::default())?;
        Ok(true)
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

impl DocumentStore for TomlBackend {
    fn find_by_ids(&self, ids: &[DocumentId]) -> anyhow::Result<Vec<Document>> {
        let store = self.load_store()?;
        Ok(store.documents.into_iter().filter(|d| ids.contains(&d.id)).collect())
    }

    fn save(&self, document: &Document) -> anyhow::Result<()> {
        let mut store = self.load_store()?;
        match store.documents.iter_mut().find(|d| d.id == document.id) {
            Some(slot) => *slot = document.clone(),
            None => store.documents.push(document.clone()),
        }
        self.save_store(&store)
    }
}

impl UserDirectory for TomlBackend {
    fn get(&self, id: UserId) -> anyhow::Result<Option<User>> {
        Ok(self.load_store()?.users.into_iter().find(|u| u.id == id))
    }

    fn get_many(&self, ids: &[UserId]) -> anyhow::Result<Vec<User>> {
        let store = self.load_store()?;
        Ok(store.users.into_iter().filter(|u| ids.contains(&u.id)).collect())
    }

    fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self.load_store()?.users.into_iter().find(|u| u.username == username))
    }

    fn current_requester(&self) -> anyhow::Result<Option<User>> {
        match self.requester.as_deref() {
            Some(key) => UserDirectory::resolve(self, key),
            None => Ok(None),
        }
    }
}

impl TagStore for TomlBackend {
    fn get(&self, id: TagId) -> anyhow::Result<Option<Tag>> {
        Ok(self.load_store()?.tags.into_iter().find(|t| t.id == id))
    }

    fn get_many(&self, ids: &[TagId]) -> anyhow::Result<Vec<Tag>> {
        let store = self.load_store()?;
        Ok(store.tags.into_iter().filter(|t| ids.contains(&t.id)).collect())
    }

    fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Tag>> {
        Ok(self.load_store()?.tags.into_iter().find(|t| t.name == name))
    }
}

impl TaskStore for TomlBackend {
    fn insert(&self, task: NewTask) -> anyhow::Result<ValidationTask> {
        let mut store = self.load_store()?;
        let used = store.tasks.iter().map(|t| t.id.0 + 1).max().unwrap_or(1);
        let id = TaskId(store.next_task_id.max(used));
        store.next_task_id = id.0 + 1;

        let task = task.into_task(id, Utc::now());
        store.tasks.push(task.clone());
        self.save_store(&store)?;
        Ok(task)
    }

    fn list(&self) -> anyhow::Result<Vec<ValidationTask>> {
        Ok(self.load_store()?.tasks)
    }

    fn update(&self, task: &ValidationTask) -> anyhow::Result<()> {
        let mut store = self.load_store()?;
        let Some(slot) = store.tasks.iter_mut().find(|t| t.id == task.id) else {
            anyhow::bail!("Task not found: {}", task.id);
        };
        *slot = task.clone();
        self.save_store(&store)
    }
}
