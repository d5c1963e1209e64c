use chrono::Utc;
use folio_core::Timestamp;
use folio_ports::Clock;

/// Wall clock in UTC, used by the CLI and the blocking entry points
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "system"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;

    #[test]
    fn test_reads_current_utc_time() {
        let before = Utc::now();
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let reading = clock.now();
        let after = Utc::now();

        assert!(reading >= before && reading <= after);
        assert!(after - before < Duration::seconds(1));
        assert_eq!(clock.name(), "system");
    }
}
