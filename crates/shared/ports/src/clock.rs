use folio_core::Timestamp;

/// Port for time abstraction
///
/// Candle windows and quote staleness are measured against `now()`, so
/// tests pin it with a fixed clock.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
