use super::color::color_for_return;
use crate::returns::{closing_price_before, percent_return};
use folio_core::Timestamp;
use folio_market_data::Holding;
use log::warn;
use serde::{Deserialize, Serialize};

/// Sector of shares the broker reports no sector for
pub const UNKNOWN_SECTOR: &str = "other";

/// One tile of the portfolio treemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioRow {
    pub ticker: String,
    pub sector: String,
    /// Percent return against the reference close
    #[serde(rename = "return")]
    pub return_pct: f64,
    /// Position value, rounded to whole currency units
    pub position: f64,
    pub color: String,
}

/// Treemap dataset: position sizes and returns per ticker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioChart {
    pub rows: Vec<RatioRow>,
}

impl RatioChart {
    /// Rows for every holding with at least one candle, sorted by ticker
    /// then sector. The return compares the last price with the close from
    /// `return_days` before `now`.
    pub fn from_holdings(holdings: &[Holding], return_days: u32, now: Timestamp) -> Self {
        let mut rows: Vec<RatioRow> = holdings
            .iter()
            .filter_map(|holding| {
                let ticker = &holding.share.ticker;
                let Some(previous) = closing_price_before(&holding.candles, return_days, now) else {
                    warn!("No candles for {}, leaving it out of the treemap", ticker);
                    return None;
                };

                let return_pct = percent_return(previous, holding.last_price);
                if !return_pct.is_finite() {
                    warn!("Return of {} is undefined (close {}), skipping", ticker, previous);
                    return None;
                }

                let sector = holding.share.sector.trim();
                Some(RatioRow {
                    ticker: ticker.clone(),
                    sector: if sector.is_empty() { UNKNOWN_SECTOR } else { sector }.to_string(),
                    return_pct,
                    position: holding.value().round(),
                    color: color_for_return(return_pct),
                })
            })
            .collect();

        rows.sort_by(|a, b| (&a.ticker, &a.sector).cmp(&(&b.ticker, &b.sector)));
        Self { rows }
    }

    pub fn returns(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.return_pct).collect()
    }

    pub fn total_position(&self) -> f64 {
        self.rows.iter().map(|r| r.position).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sectors in first-seen order with their summed position and
    /// position-weighted return
    pub fn sectors(&self) -> Vec<(String, f64, f64)> {
        let mut sectors: Vec<(String, f64, f64)> = Vec::new();
        for row in &self.rows {
            match sectors.iter_mut().find(|(name, _, _)| *name == row.sector) {
                Some((_, position, weighted)) => {
                    *position += row.position;
                    *weighted += row.return_pct * row.position;
                }
                None => sectors.push((
                    row.sector.clone(),
                    row.position,
                    row.return_pct * row.position,
                )),
            }
        }

        sectors
            .into_iter()
            .map(|(name, position, weighted)| {
                let ret = if position == 0.0 { 0.0 } else { weighted / position };
                (name, position, ret)
            })
            .collect()
    }
}
