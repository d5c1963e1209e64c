use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::instruments::Figi;
use crate::values::{PricePoint, Timestamp};

/// Most recent traded price of an instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPrice {
    pub figi: Figi,
    pub price: PricePoint,
    /// When the price was observed
    pub time: Timestamp,
}

impl LastPrice {
    pub fn new(figi: impl Into<Figi>, price: PricePoint, time: Timestamp) -> Self {
        Self {
            figi: figi.into(),
            price,
            time,
        }
    }

    /// Price as a float
    pub fn value(&self) -> f64 {
        self.price.to_f64()
    }

    /// How old the quote is at `now`
    pub fn age(&self, now: Timestamp) -> Duration {
        now - self.time
    }
}
