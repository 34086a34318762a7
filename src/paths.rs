//! Centralized path definitions for docreview
//!
//! ## Storage Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! project/
//! ├── .docreview.toml          # Project configuration
//! └── .docreview/
//!     └── store.toml           # Users, tags, documents and tasks
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/docreview/
//! └── config.toml              # Used when no project config exists
//! ```

use std::path::PathBuf;

/// Directory name for local docreview state
pub const DATA_DIR: &str = ".docreview";

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".docreview.toml";

/// Store filename inside [`DATA_DIR`]
const STORE_FILE: &str = "store.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "docreview";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Path to the project config file
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Default path of the store file
#[must_use]
pub fn default_store() -> PathBuf {
    PathBuf::from(DATA_DIR).join(STORE_FILE)
}

/// Global config directory (`~/.config/docreview` on Linux)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Path to the global config file
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
