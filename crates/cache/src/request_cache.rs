//! Load-or-fetch memoization over a [`CacheStore`]

use folio_ports::{CacheError, CacheStore};
use log::{info, warn};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

/// What to do when a stored entry no longer deserializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptEntryPolicy {
    /// Log and treat the entry as a miss
    #[default]
    Refetch,
    /// Return `CacheError::Corrupt` to the caller
    Fail,
}

/// Failure of [`RequestCache::load_or_fetch`]
#[derive(Error, Debug)]
pub enum LoadError<E> {
    /// The wrapped fetch failed; nothing was written
    #[error("fetch failed: {0}")]
    Fetch(#[source] E),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl<E> LoadError<E> {
    /// Map the fetch error, keeping cache errors as they are
    pub fn map_fetch<F>(self, f: impl FnOnce(E) -> F) -> LoadError<F> {
        match self {
            LoadError::Fetch(e) => LoadError::Fetch(f(e)),
            LoadError::Cache(e) => LoadError::Cache(e),
        }
    }
}

/// Memoizing wrapper around zero-argument async fetches
///
/// Each result is stored as JSON under a logical name. A stored entry is
/// always the complete result of one successful fetch.
#[derive(Clone)]
pub struct RequestCache {
    store: Arc<dyn CacheStore>,
    corrupt_policy: CorruptEntryPolicy,
}

impl RequestCache {
    /// Create a cache over the given store
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            corrupt_policy: CorruptEntryPolicy::default(),
        }
    }

    /// Set the corrupt-entry policy
    pub fn with_corrupt_policy(mut self, policy: CorruptEntryPolicy) -> Self {
        self.corrupt_policy = policy;
        self
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Return the entry `name`, or run `fetch` and store its result.
    ///
    /// With `force_update` the stored entry is ignored and overwritten.
    /// If `fetch` fails the error is returned and the store is untouched.
    pub async fn load_or_fetch<T, E, F, Fut>(
        &self,
        name: &str,
        fetch: F,
        force_update: bool,
    ) -> Result<T, LoadError<E>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !force_update {
            if let Some(value) = self.load(name).await? {
                info!("Load {} from cache", name);
                return Ok(value);
            }
        }

        info!("Create {}", name);
        let value = fetch().await.map_err(LoadError::Fetch)?;

        let bytes = serde_json::to_vec(&value).map_err(|e| CacheError::Serialization {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.store.put(name, &bytes).await?;

        Ok(value)
    }

    /// Read and decode an entry, applying the corrupt-entry policy
    async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, CacheError> {
        let Some(bytes) = self.store.get(name).await? else {
            return Ok(None);
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => match self.corrupt_policy {
                CorruptEntryPolicy::Refetch => {
                    warn!("Cache entry {} is corrupt ({}), fetching again", name, e);
                    Ok(None)
                }
                CorruptEntryPolicy::Fail => Err(CacheError::Corrupt {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCache;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    fn cache() -> (RequestCache, Arc<MemoryCache>) {
        let store = Arc::new(MemoryCache::new());
        (RequestCache::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_store() {
        let (cache, _) = cache();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value: Vec<u32> = cache
                .load_or_fetch(
                    "numbers",
                    || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok::<_, Boom>(vec![1, 2, 3])
                    },
                    false,
                )
                .await
                .unwrap();
            assert_eq!(value, vec![1, 2, 3]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_force_update_fetches_every_time() {
        let (cache, store) = cache();
        let calls = AtomicUsize::new(0);

        for i in 0..3u32 {
            let value: u32 = cache
                .load_or_fetch(
                    "counter",
                    || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok::<_, Boom>(i)
                    },
                    true,
                )
                .await
                .unwrap();
            assert_eq!(value, i);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(store.writes(), 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_writes_nothing() {
        let (cache, store) = cache();

        let result: Result<u32, _> = cache
            .load_or_fetch("broken", || async { Err(Boom) }, false)
            .await;

        assert!(matches!(result, Err(LoadError::Fetch(Boom))));
        assert!(!store.contains("broken").await.unwrap());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_failed_forced_fetch_keeps_previous_entry() {
        let (cache, store) = cache();
        let _: u32 = cache
            .load_or_fetch("value", || async { Ok::<_, Boom>(7) }, false)
            .await
            .unwrap();

        let result: Result<u32, _> = cache
            .load_or_fetch("value", || async { Err(Boom) }, true)
            .await;
        assert!(result.is_err());

        assert_eq!(store.get("value").await.unwrap().unwrap(), b"7");
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_refetched_by_default() {
        let (cache, store) = cache();
        store.put("shares", b"{not json").await.unwrap();

        let value: Vec<String> = cache
            .load_or_fetch(
                "shares",
                || async { Ok::<_, Boom>(vec!["SBER".to_string()]) },
                false,
            )
            .await
            .unwrap();

        assert_eq!(value, vec!["SBER".to_string()]);
        assert_eq!(store.get("shares").await.unwrap().unwrap(), br#"["SBER"]"#);
    }

    #[tokio::test]
    async fn test_corrupt_entry_fails_under_strict_policy() {
        let store = Arc::new(MemoryCache::new());
        let cache = RequestCache::new(store.clone()).with_corrupt_policy(CorruptEntryPolicy::Fail);
        store.put("shares", b"{not json").await.unwrap();

        let result: Result<Vec<String>, _> = cache
            .load_or_fetch("shares", || async { Ok::<_, Boom>(vec![]) }, false)
            .await;

        assert!(matches!(
            result,
            Err(LoadError::Cache(CacheError::Corrupt { .. }))
        ));
    }

    #[test]
    fn test_map_fetch() {
        let err: LoadError<Boom> = LoadError::Fetch(Boom);
        let mapped = err.map_fetch(|e| e.to_string());
        assert!(matches!(mapped, LoadError::Fetch(ref s) if s == "boom"));
    }
}
