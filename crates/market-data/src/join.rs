//! Joins of shares, positions, last prices and candles by FIGI

use folio_core::{Candle, Figi, LastPrice, Position, Share};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Provider data needed by the portfolio pipelines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub shares: Vec<Share>,
    pub positions: Vec<Position>,
    pub last_prices: Vec<LastPrice>,
}

impl MarketSnapshot {
    pub fn new(shares: Vec<Share>, positions: Vec<Position>, last_prices: Vec<LastPrice>) -> Self {
        Self {
            shares,
            positions,
            last_prices,
        }
    }

    pub fn shares_by_figi(&self) -> HashMap<&Figi, &Share> {
        self.shares.iter().map(|s| (&s.figi, s)).collect()
    }

    pub fn last_prices_by_figi(&self) -> HashMap<&Figi, &LastPrice> {
        self.last_prices.iter().map(|p| (&p.figi, p)).collect()
    }

    /// Every FIGI with a position on the account
    pub fn held_figis(&self) -> HashSet<&Figi> {
        self.positions.iter().map(|p| &p.figi).collect()
    }

    /// Share positions whose share is priced in `currency`, paired with
    /// the share. Positions with no known share are skipped.
    pub fn held_shares(&self, currency: &str) -> Vec<(&Position, &Share)> {
        let shares = self.shares_by_figi();

        self.positions
            .iter()
            .filter(|p| p.is_share())
            .filter_map(|p| match shares.get(&p.figi) {
                Some(share) => Some((p, *share)),
                None => {
                    warn!("Position {} has no matching share, skipping", p.figi);
                    None
                }
            })
            .filter(|(_, share)| share.currency == currency)
            .collect()
    }

    /// Holdings of share positions in `currency`, with their last price and
    /// candles. Positions without a last price are skipped; missing candles
    /// leave an empty sequence.
    pub fn holdings(&self, currency: &str, candles: &HashMap<Figi, Vec<Candle>>) -> Vec<Holding> {
        let prices = self.last_prices_by_figi();

        self.held_shares(currency)
            .into_iter()
            .filter_map(|(position, share)| {
                let Some(price) = prices.get(&position.figi) else {
                    warn!("No last price for {}, skipping", share.ticker);
                    return None;
                };
                Some(Holding {
                    share: share.clone(),
                    balance: position.balance,
                    last_price: price.value(),
                    candles: candles.get(&position.figi).cloned().unwrap_or_default(),
                })
            })
            .collect()
    }
}

/// A held share with everything the charts need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub share: Share,
    /// Units held
    pub balance: i64,
    pub last_price: f64,
    /// Ascending by time
    pub candles: Vec<Candle>,
}

impl Holding {
    /// Current value of the position
    pub fn value(&self) -> f64 {
        self.balance as f64 * self.last_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use folio_core::{InstrumentType, PricePoint};

    fn share(figi: &str, ticker: &str, currency: &str) -> Share {
        let mut s = Share::new(figi, ticker, 10);
        s.currency = currency.to_string();
        s
    }

    fn snapshot() -> MarketSnapshot {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        MarketSnapshot::new(
            vec![
                share("F1", "SBER", "rub"),
                share("F2", "AAPL", "usd"),
                share("F3", "GAZP", "rub"),
            ],
            vec![
                Position::new("F1", 20, InstrumentType::Share),
                Position::new("F2", 5, InstrumentType::Share),
                Position::new("F3", 7, InstrumentType::Share),
                Position::new("B1", 3, InstrumentType::Bond),
                Position::new("F9", 1, InstrumentType::Share),
            ],
            vec![
                LastPrice::new("F1", PricePoint::new(250, 500_000_000), at),
                LastPrice::new("F2", PricePoint::new(180, 0), at),
            ],
        )
    }

    #[test]
    fn test_held_shares_keeps_rub_shares_only() {
        let snapshot = snapshot();
        let held: Vec<&str> = snapshot
            .held_shares("rub")
            .iter()
            .map(|(_, s)| s.ticker.as_str())
            .collect();
        assert_eq!(held, vec!["SBER", "GAZP"]);
    }

    #[test]
    fn test_holdings_skip_unpriced_positions() {
        let snapshot = snapshot();
        let at = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        let mut candles = HashMap::new();
        candles.insert(
            Figi::from("F1"),
            vec![Candle::close_only("F1", at, PricePoint::new(240, 0))],
        );

        let holdings = snapshot.holdings("rub", &candles);
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].share.ticker, "SBER");
        assert_eq!(holdings[0].candles.len(), 1);
        assert_eq!(holdings[0].value(), 5010.0);
    }

    #[test]
    fn test_held_figis() {
        let snapshot = snapshot();
        let held = snapshot.held_figis();
        assert!(held.contains(&Figi::from("B1")));
        assert_eq!(held.len(), 5);
    }
}
