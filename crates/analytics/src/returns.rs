use chrono::Duration;
use folio_core::{Candle, Timestamp};

/// Close of the newest candle strictly older than `cutoff_days` before `now`.
///
/// Falls back to the oldest close when every candle is newer, and returns
/// `None` for an empty sequence. `candles` are ascending by time.
pub fn closing_price_before(candles: &[Candle], cutoff_days: u32, now: Timestamp) -> Option<f64> {
    let cutoff = now - Duration::days(cutoff_days as i64);

    candles
        .iter()
        .rev()
        .find(|c| c.time < cutoff)
        .or_else(|| candles.first())
        .map(Candle::close_value)
}

/// Percent change from `previous` to `current`
pub fn percent_return(previous: f64, current: f64) -> f64 {
    (current - previous) / previous * 100.0
}
