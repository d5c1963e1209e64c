//! Folio Core Domain
//!
//! Pure domain types for the Folio portfolio tooling.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Account, Candle, CandleInterval, InstrumentType, LastPrice, Position};
pub use instruments::{Figi, Share, ShareType};
pub use values::{PricePoint, Timestamp, price_from_fixed_point};
