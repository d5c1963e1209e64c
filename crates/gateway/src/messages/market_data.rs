//! MarketDataService messages

use chrono::{DateTime, Utc};
use folio_core::{Candle, CandleInterval, Figi, LastPrice};
use serde::{Deserialize, Serialize};

use super::wire::{QuotationWire, de_i64};

#[derive(Debug, Clone, Serialize)]
pub struct GetLastPricesRequest {
    pub figi: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetLastPricesResponse {
    pub last_prices: Vec<LastPriceWire>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LastPriceWire {
    pub figi: String,
    pub price: QuotationWire,
    /// Epoch when the provider never saw a trade
    pub time: DateTime<Utc>,
}

impl From<LastPriceWire> for LastPrice {
    fn from(w: LastPriceWire) -> Self {
        LastPrice::new(w.figi, w.price.into(), w.time)
    }
}

impl GetLastPricesResponse {
    pub fn into_last_prices(self) -> Vec<LastPrice> {
        self.last_prices.into_iter().map(LastPrice::from).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetCandlesRequest {
    pub figi: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub interval: &'static str,
}

impl GetCandlesRequest {
    pub fn new(figi: &Figi, from: DateTime<Utc>, to: DateTime<Utc>, interval: CandleInterval) -> Self {
        Self {
            figi: figi.to_string(),
            from,
            to,
            interval: interval.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetCandlesResponse {
    pub candles: Vec<CandleWire>,
}

/// Historic candle (the figi is implied by the request)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandleWire {
    pub open: QuotationWire,
    pub high: QuotationWire,
    pub low: QuotationWire,
    pub close: QuotationWire,
    #[serde(deserialize_with = "de_i64")]
    pub volume: i64,
    pub time: DateTime<Utc>,
    pub is_complete: bool,
}

impl CandleWire {
    pub fn into_candle(self, figi: &Figi) -> Candle {
        Candle {
            figi: figi.clone(),
            time: self.time,
            open: self.open.into(),
            high: self.high.into(),
            low: self.low.into(),
            close: self.close.into(),
            volume: self.volume,
            is_complete: self.is_complete,
        }
    }
}

impl GetCandlesResponse {
    /// Domain candles, sorted ascending by time
    pub fn into_candles(self, figi: &Figi) -> Vec<Candle> {
        let mut candles: Vec<Candle> = self
            .candles
            .into_iter()
            .map(|c| c.into_candle(figi))
            .collect();
        candles.sort_by_key(|c| c.time);
        candles
    }
}
