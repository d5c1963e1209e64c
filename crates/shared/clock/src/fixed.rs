use chrono::Duration;
use folio_core::Timestamp;
use folio_ports::Clock;
use std::sync::RwLock;

/// Clock pinned to a given instant
///
/// Only moves through [`FixedClock::set`] and [`FixedClock::advance`], which
/// makes candle windows and quote ages deterministic in tests.
pub struct FixedClock {
    current: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self {
            current: RwLock::new(at),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, at: Timestamp) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = at;
    }

    /// Move forward (or backward, for negative durations)
    pub fn advance(&self, by: Duration) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
