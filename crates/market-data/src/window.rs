//! Candle window narrowing policy
//!
//! The provider caps how long a single candle request may span. When a
//! request is rejected with `RangeExceeded` the window start moves forward
//! and the request is retried. Short-interval data is limited to recent
//! ranges, but the limit loosens for anything older than a year, so the
//! step is capped differently on each side of that line.

use chrono::Duration;
use folio_core::{Candle, Timestamp};
use folio_ports::{ApiError, ApiResult};

/// Smallest window the fetcher will ask for
pub const MIN_WINDOW_DAYS: i64 = 1;

/// Largest forward step of the window start per retry
pub const NARROW_STEP_DAYS: i64 = 30;

/// Boundary between "recent" and "historic" data
pub const RECENT_LIMIT_DAYS: i64 = 365;

/// Half-open request window `[from, to]` for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleWindow {
    pub from: Timestamp,
    pub to: Timestamp,
}

impl CandleWindow {
    pub fn new(from: Timestamp, to: Timestamp) -> Self {
        Self { from, to }
    }

    /// `[to - n_days, to]`, or `None` when the start is not representable
    pub fn lookback(to: Timestamp, n_days: u32) -> Option<Self> {
        let from = to.checked_sub_signed(Duration::days(n_days as i64))?;
        Some(Self { from, to })
    }

    /// The window cannot be narrowed any further
    pub fn is_minimal(&self) -> bool {
        self.from >= self.to - Duration::days(MIN_WINDOW_DAYS)
    }

    /// Start lies inside the most recent year
    pub fn is_recent(&self) -> bool {
        self.from >= self.to - Duration::days(RECENT_LIMIT_DAYS)
    }

    pub fn span(&self) -> Duration {
        self.to - self.from
    }
}

impl std::fmt::Display for CandleWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} .. {}]",
            self.from.format("%Y-%m-%d %H:%M"),
            self.to.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Next, shorter window after a `RangeExceeded` rejection.
///
/// The start advances by up to [`NARROW_STEP_DAYS`], capped at `to - 1 day`
/// for recent windows and at `to - 365 days` for older ones. Returns `None`
/// for a minimal window. A returned window always starts strictly later.
pub fn narrow_window(window: &CandleWindow) -> Option<CandleWindow> {
    if window.is_minimal() {
        return None;
    }

    let cap = if window.is_recent() {
        window.to - Duration::days(MIN_WINDOW_DAYS)
    } else {
        window.to - Duration::days(RECENT_LIMIT_DAYS)
    };
    let from = (window.from + Duration::days(NARROW_STEP_DAYS)).min(cap);

    Some(CandleWindow::new(from, window.to))
}

/// Outcome of one candle request
#[derive(Debug, Clone, PartialEq)]
pub enum WindowStep {
    /// The window was accepted
    Done(Vec<Candle>),
    /// Retry with this narrower window
    Narrow(CandleWindow),
    /// Give up. A `RangeExceeded` here means the window was already minimal.
    Fatal(ApiError),
}

/// Classify a request result against the window it was made for
pub fn classify_attempt(result: ApiResult<Vec<Candle>>, window: &CandleWindow) -> WindowStep {
    match result {
        Ok(candles) => WindowStep::Done(candles),
        Err(err) if err.is_range_exceeded() => match narrow_window(window) {
            Some(next) => WindowStep::Narrow(next),
            None => WindowStep::Fatal(err),
        },
        Err(err) => WindowStep::Fatal(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn to() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_lookback() {
        let w = CandleWindow::lookback(to(), 10).unwrap();
        assert_eq!(w.span(), Duration::days(10));
        assert!(!w.is_minimal());
        assert!(w.is_recent());
    }

    #[test]
    fn test_unrepresentable_lookback() {
        assert_eq!(CandleWindow::lookback(to(), u32::MAX), None);
        assert!(CandleWindow::lookback(to(), 36_500).is_some());
    }

    #[test]
    fn test_one_day_window_is_minimal() {
        let w = CandleWindow::lookback(to(), 1).unwrap();
        assert!(w.is_minimal());
        assert_eq!(narrow_window(&w), None);

        let empty = CandleWindow::lookback(to(), 0).unwrap();
        assert_eq!(narrow_window(&empty), None);
    }

    #[test]
    fn test_recent_window_steps_by_thirty_days() {
        let w = CandleWindow::lookback(to(), 100).unwrap();
        let next = narrow_window(&w).unwrap();
        assert_eq!(next.from, w.from + Duration::days(30));
        assert_eq!(next.to, w.to);
    }

    #[test]
    fn test_recent_window_is_capped_at_one_day() {
        let w = CandleWindow::lookback(to(), 20).unwrap();
        let next = narrow_window(&w).unwrap();
        assert_eq!(next.from, to() - Duration::days(1));
        assert!(next.is_minimal());
    }

    #[test]
    fn test_historic_window_is_capped_at_one_year() {
        let w = CandleWindow::lookback(to(), 380).unwrap();
        let next = narrow_window(&w).unwrap();
        assert_eq!(next.from, to() - Duration::days(365));

        let far = CandleWindow::lookback(to(), 1000).unwrap();
        let next = narrow_window(&far).unwrap();
        assert_eq!(next.from, far.from + Duration::days(30));
    }

    #[test]
    fn test_narrowing_is_strictly_monotonic_and_terminates() {
        for n_days in [2u32, 31, 45, 364, 365, 366, 400, 3650] {
            let mut w = CandleWindow::lookback(to(), n_days).unwrap();
            let mut steps = 0;
            while let Some(next) = narrow_window(&w) {
                assert!(next.from > w.from, "no progress from {}", w);
                assert_eq!(next.to, w.to);
                w = next;
                steps += 1;
                assert!(steps < 1000);
            }
            assert!(w.is_minimal());
        }
    }

    #[test]
    fn test_classify_attempt() {
        let w = CandleWindow::lookback(to(), 100).unwrap();

        assert_eq!(classify_attempt(Ok(vec![]), &w), WindowStep::Done(vec![]));

        let range = ApiError::RangeExceeded("30014".into());
        assert!(matches!(
            classify_attempt(Err(range.clone()), &w),
            WindowStep::Narrow(next) if next.from > w.from
        ));

        let minimal = CandleWindow::lookback(to(), 1).unwrap();
        assert_eq!(
            classify_attempt(Err(range.clone()), &minimal),
            WindowStep::Fatal(range)
        );

        assert_eq!(
            classify_attempt(Err(ApiError::Timeout), &w),
            WindowStep::Fatal(ApiError::Timeout)
        );
    }
}
