//! Folio Clock Infrastructure
//!
//! Provides time sources for production and tests:
//!
//! - [`SystemClock`]: wall-clock time
//! - [`FixedClock`]: time that only moves when told to
//!
//! ## Usage
//!
//! ```ignore
//! use folio_clock::{Clock, FixedClock};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
//! clock.advance(Duration::days(1));
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use folio_ports::Clock;
