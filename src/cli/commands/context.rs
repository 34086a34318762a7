//! Shared setup for commands that act on the store

use anyhow::Context as _;
use log::debug;

use docreview::adapters::TomlBackend;
use docreview::config::Config;
use docreview::core::models::User;
use docreview::core::ports::{Backend, UserDirectory};
use docreview::core::services::AssignmentWorkflow;

/// Loaded config plus the store it points at
#[derive(Debug)]
pub struct Session {
    config: Config,
    backend: TomlBackend,
}

impl Session {
    /// Load config and open the store, acting as `user`
    pub fn open(user: Option<&str>) -> anyhow::Result<Self> {
        let config = Config::load()?;
        debug!("Using store {}", config.store.path.display());
        let backend =
            TomlBackend::new(config.store.path.clone()).with_requester(user.map(String::from));
        Ok(Self { config, backend })
    }

    /// The user running the command
    pub fn requester(&self) -> anyhow::Result<User> {
        let Some(key) = self.backend.requester() else {
            anyhow::bail!("No user given. Pass --user or set DOCREVIEW_USER.");
        };
        self.backend
            .current_requester()
            .with_context(|| format!("Failed to read {}", self.backend.path().display()))?
            .with_context(|| format!("Unknown user: {key}"))
    }

    /// The store's ports
    pub fn backend(&self) -> Backend<'_> {
        self.backend.backend()
    }

    /// A workflow over this session's store
    pub fn workflow(&self) -> AssignmentWorkflow<'_> {
        AssignmentWorkflow::new(self.backend.backend(), self.config.visibility_policy())
            .require_tag(self.config.assignment.require_tag)
    }
}
