//! Folio Ports
//!
//! Port definitions (traits) for the Folio portfolio tooling.
//! These define the boundaries between domain logic and infrastructure:
//! the brokerage API, the on-disk cache and the wall clock.

mod cache;
mod clock;
mod error;
mod invest;

pub use cache::CacheStore;
pub use clock::Clock;
pub use error::{ApiError, ApiResult, CacheError, CacheResult};
pub use invest::InvestApi;
