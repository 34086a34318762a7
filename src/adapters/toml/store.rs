//! Store file format
//!
//! A single TOML document holds users, tags, documents and tasks:
//!
//! ```toml
//! next_task_id = 3
//!
//! [[users]]
//! id = 1
//! username = "alice"
//! groups = ["Staff"]
//!
//! [[tags]]
//! id = 1
//! name = "urgent"
//! due_date = "2024-06-01"
//!
//! [[documents]]
//! id = 1
//! title = "Invoice 2024-001"
//! tags = [1]
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{Document, Tag, User, ValidationTask};

/// Contents of a store file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreFile {
    /// Id handed to the next inserted task
    #[serde(default = "default_next_task_id")]
    pub next_task_id: u64,

    /// Directory users
    #[serde(default)]
    pub users: Vec<User>,

    /// Tags
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Documents
    #[serde(default)]
    pub documents: Vec<Document>,

    /// Validation tasks
    #[serde(default)]
    pub tasks: Vec<ValidationTask>,
}

const fn default_next_task_id() -> u64 {
    1
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            next_task_id: default_next_task_id(),
            users: Vec::new(),
            tags: Vec::new(),
            documents: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

/// Load a store file. A missing file is an empty store.
pub fn load_file(path: &Path) -> anyhow::Result<StoreFile> {
    if !path.exists() {
        return Ok(StoreFile::default());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write a store file, creating parent directories
pub fn save_file(path: &Path, store: &StoreFile) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(store)?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
