//! In-process cache store

use async_trait::async_trait;
use folio_ports::{CacheResult, CacheStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Cache store backed by a map, for tests and one-shot runs
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
    writes: AtomicUsize,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `put` calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, name: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(name).cloned())
    }

    async fn put(&self, name: &str, bytes: &[u8]) -> CacheResult<()> {
        self.entries
            .write()
            .await
            .insert(name.to_string(), bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, name: &str) -> CacheResult<bool> {
        Ok(self.entries.write().await.remove(name).is_some())
    }

    fn name(&self) -> &str {
        "MemoryCache"
    }
}
