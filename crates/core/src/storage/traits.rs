use async_trait::async_trait;

use super::{Record, Result};

/// Get/put/delete access to a single key-value table.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Looks up a record by key.
    ///
    /// Returns `Ok(None)` when no record matches.
    async fn get(&self, key: &str) -> Result<Option<Record>>;

    /// Stores `value` under `key`, overwriting any existing record.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the record stored under `key`.
    ///
    /// Deleting a key that does not exist succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}
