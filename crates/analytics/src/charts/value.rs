use folio_core::Timestamp;
use folio_market_data::Holding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub time: Timestamp,
    pub value: f64,
}

/// Portfolio value over time, from the holdings' closes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueSeries {
    pub points: Vec<ValuePoint>,
}

impl ValueSeries {
    /// One point per candle time seen in any holding.
    ///
    /// Each holding contributes `balance * close` of its latest candle at or
    /// before that time, and nothing before its first candle.
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let times: BTreeSet<Timestamp> = holdings
            .iter()
            .flat_map(|h| h.candles.iter().map(|c| c.time))
            .collect();

        let mut cursors = vec![0usize; holdings.len()];
        let points = times
            .into_iter()
            .map(|time| {
                let value = holdings
                    .iter()
                    .zip(cursors.iter_mut())
                    .map(|(holding, cursor)| {
                        while *cursor < holding.candles.len() && holding.candles[*cursor].time <= time {
                            *cursor += 1;
                        }
                        match cursor.checked_sub(1) {
                            Some(i) => holding.balance as f64 * holding.candles[i].close_value(),
                            None => 0.0,
                        }
                    })
                    .sum();
                ValuePoint { time, value }
            })
            .collect();

        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&ValuePoint> {
        self.points.last()
    }
}
