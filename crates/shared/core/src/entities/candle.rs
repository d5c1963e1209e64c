use serde::{Deserialize, Serialize};

use crate::instruments::Figi;
use crate::values::{PricePoint, Timestamp};

/// Candle aggregation interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    Hour,
    Day,
    Week,
}

impl CandleInterval {
    /// Provider enum name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "CANDLE_INTERVAL_HOUR",
            Self::Day => "CANDLE_INTERVAL_DAY",
            Self::Week => "CANDLE_INTERVAL_WEEK",
        }
    }
}

/// One OHLC record for an instrument over an interval
///
/// Sequences of candles are ordered ascending by `time`, one sequence per
/// instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub figi: Figi,
    /// Interval start (trading date for day candles)
    pub time: Timestamp,
    pub open: PricePoint,
    pub high: PricePoint,
    pub low: PricePoint,
    pub close: PricePoint,
    pub volume: i64,
    /// False while the interval is still trading
    pub is_complete: bool,
}

impl Candle {
    /// Candle carrying only a close, used where OHLC detail is irrelevant
    pub fn close_only(figi: impl Into<Figi>, time: Timestamp, close: PricePoint) -> Self {
        Self {
            figi: figi.into(),
            time,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
            is_complete: true,
        }
    }

    /// Closing price as a float
    pub fn close_value(&self) -> f64 {
        self.close.to_f64()
    }
}
