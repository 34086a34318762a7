//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the assignment workflow and
//! the systems it consults: the document store, the user directory, the tag
//! store and task persistence.
//!
//! Implementations live in the `adapters` module.

mod document_store;
mod tag_store;
mod task_store;
mod user_directory;

pub use document_store::DocumentStore;
pub use tag_store::TagStore;
pub use task_store::TaskStore;
pub use user_directory::UserDirectory;

/// The set of ports a workflow runs against
#[derive(Clone, Copy)]
pub struct Backend<'a> {
    /// Document records
    pub documents: &'a dyn DocumentStore,
    /// Users and the current requester
    pub users: &'a dyn UserDirectory,
    /// Tags
    pub tags: &'a dyn TagStore,
    /// Validation tasks
    pub tasks: &'a dyn TaskStore,
}

impl std::fmt::Debug for Backend<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend").finish_non_exhaustive()
    }
}
