//! Document store port
//!
//! Defines the interface to the external document store.

use super::super::models::{Document, DocumentId, Tag};

/// Storage backend for documents
///
/// The workflow never creates or deletes documents. It resolves them by id
/// and writes back tag changes.
pub trait DocumentStore: Send + Sync {
    /// Resolve the given ids to documents
    ///
    /// Ids without a matching document are skipped silently. The order of the
    /// result is unspecified.
    fn find_by_ids(&self, ids: &[DocumentId]) -> anyhow::Result<Vec<Document>>;

    /// Persist a document record
    fn save(&self, document: &Document) -> anyhow::Result<()>;

    /// Add a tag to a document record (in memory, not persisted)
    ///
    /// Returns `false` when the document already carried the tag.
    fn add_tag(&self, document: &mut Document, tag: &Tag) -> bool {
        document.add_tag(tag.id)
    }
}
