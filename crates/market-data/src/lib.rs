//! Folio Market Data
//!
//! Gets everything the analytics need out of the invest API:
//!
//! - **Window**: the candle window narrowing policy (pure)
//! - **Candles**: paged historical-candle fetcher, concurrent across instruments
//! - **Loader**: cache-wrapped requests for shares, positions, last prices, candles
//! - **Join**: positions, shares, prices and candles joined by FIGI
//!
//! ## Flow
//!
//! ```text
//!   shares ─┐
//!   last prices ─┼─► MarketSnapshot ──► held shares ──► candles (paged)
//!   positions ─┘                              │
//!                                             ▼
//!                                       Vec<Holding>
//! ```

pub mod candles;
pub mod error;
pub mod join;
pub mod loader;
pub mod window;

pub use candles::{CandleFetcher, FetchConfig};
pub use error::{MarketDataError, MarketDataResult};
pub use join::{Holding, MarketSnapshot};
pub use loader::{CacheNames, MarketDataLoader};
pub use window::{CandleWindow, WindowStep, classify_attempt, narrow_window};
