//! Folio Gateway
//!
//! Gateway layer between Folio and the brokerage invest API. Provides:
//! - A REST client ([`RestClient`]) implementing the `InvestApi` port
//! - Wire message types for the REST gateway's JSON payloads
//! - Classification of provider errors into port errors
//!
//! ## Architecture
//!
//! ```text
//!   Invest API REST gateway
//!         │  POST {base}/{Service}/{Method}
//!    ┌────▼────┐
//!    │ Gateway │  wire messages → domain types
//!    └────┬────┘
//!         │ InvestApi
//!    ┌────▼────┐
//!    │Pipelines│  cache, candle paging, analytics
//!    └─────────┘
//! ```
//!
//! Only two provider failures carry meaning past this layer:
//! `RangeExceeded` (candle window too long) and `Authentication`.

pub mod client;
pub mod config;
pub mod error;
pub mod messages;

// Re-export commonly used types
pub use client::RestClient;
pub use config::{GatewayConfig, Services};
pub use error::{ErrorBody, RestError, classify_error};
