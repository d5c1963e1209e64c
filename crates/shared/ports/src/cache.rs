use async_trait::async_trait;

use crate::error::CacheResult;

/// Port for a named blob store backing the request cache
///
/// Entries are independent units keyed by a logical name; there are no
/// cross-entry transactions.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read the entry, `None` when it does not exist
    async fn get(&self, name: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Create or overwrite the entry
    async fn put(&self, name: &str, bytes: &[u8]) -> CacheResult<()>;

    /// Delete the entry. Returns whether it existed.
    async fn remove(&self, name: &str) -> CacheResult<bool>;

    /// Check if the entry exists
    async fn contains(&self, name: &str) -> CacheResult<bool> {
        Ok(self.get(name).await?.is_some())
    }

    /// Store name for logs
    fn name(&self) -> &str {
        "CacheStore"
    }
}
