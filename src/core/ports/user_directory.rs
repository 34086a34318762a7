//! User directory port

use super::super::models::{User, UserId};

/// Lookup of users and the current requester
pub trait UserDirectory: Send + Sync {
    /// Get a user by id
    fn get(&self, id: UserId) -> anyhow::Result<Option<User>>;

    /// Get every user whose id is in `ids`
    ///
    /// Unknown ids are skipped. Backends that pay per lookup should override
    /// this with a single read.
    fn get_many(&self, ids: &[UserId]) -> anyhow::Result<Vec<User>> {
        let mut users = Vec::with_capacity(ids.len());
        for &id in ids {
            users.extend(self.get(id)?);
        }
        Ok(users)
    }

    /// Find a user by username
    fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;

    /// The user on whose behalf the current request runs
    fn current_requester(&self) -> anyhow::Result<Option<User>>;

    /// Resolve a form value to a user
    ///
    /// Numeric values are tried as ids first, then as usernames.
    fn resolve(&self, key: &str) -> anyhow::Result<Option<User>> {
        let key = key.trim();
        if let Ok(id) = key.parse::<UserId>()
            && let Some(user) = self.get(id)?
        {
            return Ok(Some(user));
        }
        self.find_by_username(key)
    }
}
