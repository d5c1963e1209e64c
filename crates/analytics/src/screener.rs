//! Discovery of tradable domestic shares that are not held yet

use chrono::Duration;
use folio_core::{Figi, LastPrice, Share, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Eligibility criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Budget for one lot
    pub max_price: Decimal,
    pub currency: String,
    /// Listing class, `TQBR` is the main board of the Moscow Exchange
    pub class_code: String,
    pub country_of_risk: String,
    /// Quotes older than this are stale
    pub max_quote_age_days: u32,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            max_price: Decimal::from(5000),
            currency: "rub".to_string(),
            class_code: "TQBR".to_string(),
            country_of_risk: "RU".to_string(),
            max_quote_age_days: 7,
        }
    }
}

/// One line of the screening result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRow {
    pub ticker: String,
    pub name: String,
    /// Price of one lot
    pub price: Decimal,
    pub sector: String,
    pub share_type: String,
    pub exchange: String,
}

impl ShareRow {
    pub fn new(share: &Share, lot_price: Decimal) -> Self {
        Self {
            ticker: share.ticker.clone(),
            name: share.name.clone(),
            price: lot_price,
            sector: share.sector.clone(),
            share_type: share.share_type.as_str().to_string(),
            exchange: share.exchange.clone(),
        }
    }
}

pub struct Screener {
    config: ScreenerConfig,
}

impl Screener {
    pub fn new(config: ScreenerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// Lot price of `share` if it passes every criterion
    pub fn eligible_lot_price(
        &self,
        share: &Share,
        held: &HashSet<&Figi>,
        last_price: Option<&LastPrice>,
        now: Timestamp,
    ) -> Option<Decimal> {
        let cfg = &self.config;

        if share.currency != cfg.currency
            || share.otc
            || !share.is_tradable()
            || share.for_qualified_investors
            || share.class_code != cfg.class_code
            || held.contains(&share.figi)
            || share.country_of_risk != cfg.country_of_risk
        {
            return None;
        }

        let last_price = last_price?;
        if last_price.age(now) > Duration::days(cfg.max_quote_age_days as i64) {
            return None;
        }

        let lot_price = last_price.price.to_decimal() * Decimal::from(share.lot);
        (lot_price <= cfg.max_price).then_some(lot_price)
    }

    /// Eligible shares ranked ascending by lot price
    pub fn screen(
        &self,
        shares: &[Share],
        held: &HashSet<&Figi>,
        last_prices: &HashMap<&Figi, &LastPrice>,
        now: Timestamp,
    ) -> Vec<ShareRow> {
        let mut rows: Vec<ShareRow> = shares
            .iter()
            .filter_map(|share| {
                let last_price = last_prices.get(&share.figi).copied();
                self.eligible_lot_price(share, held, last_price, now)
                    .map(|price| ShareRow::new(share, price))
            })
            .collect();

        rows.sort_by(|a, b| a.price.cmp(&b.price));
        rows
    }
}

impl Default for Screener {
    fn default() -> Self {
        Self::new(ScreenerConfig::default())
    }
}
