//! Folio Cache
//!
//! Memoization of network requests, keyed by a logical name:
//!
//! - [`RequestCache`]: wraps a zero-argument async fetch; returns the stored
//!   value when present, otherwise fetches, stores and returns
//! - [`DiskCache`]: one `<name>.json` file per entry under an explicit directory
//! - [`MemoryCache`]: in-process store for tests
//!
//! ## Usage
//!
//! ```ignore
//! use folio_cache::{DiskCache, RequestCache};
//! use std::sync::Arc;
//!
//! let cache = RequestCache::new(Arc::new(DiskCache::new("cache")));
//! let shares = cache
//!     .load_or_fetch("shares", || async { api.shares().await }, false)
//!     .await?;
//! ```
//!
//! ## Limitations
//!
//! The cache is a development convenience, not a durability mechanism.
//! Two processes writing the same name race and the last write wins.

mod disk;
mod memory;
mod request_cache;

pub use disk::DiskCache;
pub use memory::MemoryCache;
pub use request_cache::{CorruptEntryPolicy, LoadError, RequestCache};

pub use folio_ports::{CacheError, CacheResult, CacheStore};
