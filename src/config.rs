//! Configuration management
//!
//! Settings are read from `.docreview.toml` in the working directory, or from
//! the global config file when no project file exists. Missing files and
//! missing keys fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::services::VisibilityPolicy;
use crate::core::services::visibility::DEFAULT_STAFF_GROUP;
use crate::paths;

/// docreview configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Role and visibility settings
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Assignment form settings
    #[serde(default)]
    pub assignment: AssignmentConfig,
    /// Store location
    #[serde(default)]
    pub store: StoreConfig,
}

/// Role and visibility settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Group whose members get the staff role
    #[serde(default = "default_staff_group")]
    pub staff_group: String,
}

fn default_staff_group() -> String {
    DEFAULT_STAFF_GROUP.to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            staff_group: default_staff_group(),
        }
    }
}

/// Assignment form settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    /// Reject submissions without a tag
    #[serde(default = "default_require_tag")]
    pub require_tag: bool,
}

const fn default_require_tag() -> bool {
    true
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            require_tag: default_require_tag(),
        }
    }
}

/// Store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the store file, relative to the working directory
    #[serde(default = "paths::default_store")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: paths::default_store(),
        }
    }
}

impl Config {
    /// Load the project config, else the global config, else defaults
    pub fn load() -> anyhow::Result<Self> {
        let project = paths::project_config();
        if project.exists() {
            return Self::load_from(&project);
        }
        let global = paths::global_config();
        if global.exists() {
            return Self::load_from(&global);
        }
        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the visibility policy described by this config
    #[must_use]
    pub fn visibility_policy(&self) -> VisibilityPolicy {
        VisibilityPolicy::new(self.policy.staff_group.clone())
    }
}
