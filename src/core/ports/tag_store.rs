//! Tag store port

use super::super::models::{Tag, TagId};

/// Lookup of tags
pub trait TagStore: Send + Sync {
    /// Get a tag by id
    fn get(&self, id: TagId) -> anyhow::Result<Option<Tag>>;

    /// Get every tag whose id is in `ids`, skipping unknown ids
    fn get_many(&self, ids: &[TagId]) -> anyhow::Result<Vec<Tag>> {
        let mut tags = Vec::with_capacity(ids.len());
        for &id in ids {
            tags.extend(self.get(id)?);
        }
        Ok(tags)
    }

    /// Find a tag by name (case-sensitive)
    fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Tag>>;

    /// Resolve a form value to a tag
    ///
    /// Numeric values are tried as ids first, then as names.
    fn resolve(&self, key: &str) -> anyhow::Result<Option<Tag>> {
        let key = key.trim();
        if let Ok(id) = key.parse::<TagId>()
            && let Some(tag) = self.get(id)?
        {
            return Ok(Some(tag));
        }
        self.find_by_name(key)
    }
}
