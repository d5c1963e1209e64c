//! Cached loading of provider data

use crate::candles::{CandleFetcher, FetchConfig};
use crate::error::{MarketDataError, MarketDataResult};
use crate::join::{Holding, MarketSnapshot};
use folio_cache::RequestCache;
use folio_core::{Candle, Figi, LastPrice, Position, Share};
use folio_ports::{Clock, InvestApi};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache entry names
pub struct CacheNames;

impl CacheNames {
    pub const SHARES: &'static str = "shares";
    pub const LAST_PRICES: &'static str = "last_prices";

    pub fn positions(account_id: &str) -> String {
        format!("positions_{}", account_id)
    }

    /// Candles of the shares held on one account
    pub fn position_candles(account_id: &str, n_days: u32) -> String {
        format!("position_candles_{}_{}d", account_id, n_days)
    }
}

/// Loads shares, positions, prices and candles through the request cache
pub struct MarketDataLoader {
    api: Arc<dyn InvestApi>,
    cache: RequestCache,
    fetcher: CandleFetcher,
    force_update: bool,
}

impl MarketDataLoader {
    pub fn new(api: Arc<dyn InvestApi>, cache: RequestCache, clock: Arc<dyn Clock>) -> Self {
        let fetcher = CandleFetcher::new(api.clone(), clock);
        Self {
            api,
            cache,
            fetcher,
            force_update: false,
        }
    }

    pub fn with_fetch_config(mut self, config: FetchConfig) -> Self {
        self.fetcher = self.fetcher.with_config(config);
        self
    }

    /// Ignore stored entries and refresh them from the provider
    pub fn with_force_update(mut self, force_update: bool) -> Self {
        self.force_update = force_update;
        self
    }

    pub fn fetcher(&self) -> &CandleFetcher {
        &self.fetcher
    }

    pub async fn shares(&self) -> MarketDataResult<Vec<Share>> {
        let shares = self
            .cache
            .load_or_fetch(CacheNames::SHARES, || self.api.shares(), self.force_update)
            .await?;
        Ok(shares)
    }

    /// Last prices of the given shares
    pub async fn last_prices(&self, shares: &[Share]) -> MarketDataResult<Vec<LastPrice>> {
        let figis: Vec<Figi> = shares.iter().map(|s| s.figi.clone()).collect();
        let prices = self
            .cache
            .load_or_fetch(
                CacheNames::LAST_PRICES,
                || self.api.last_prices(&figis),
                self.force_update,
            )
            .await?;
        Ok(prices)
    }

    pub async fn positions(&self, account_id: &str) -> MarketDataResult<Vec<Position>> {
        let positions = self
            .cache
            .load_or_fetch(
                &CacheNames::positions(account_id),
                || self.api.positions(account_id),
                self.force_update,
            )
            .await?;
        Ok(positions)
    }

    /// Candles over the last `n_days` of `shares`, the shares held on
    /// `account_id`
    pub async fn candles(
        &self,
        account_id: &str,
        shares: &[Share],
        n_days: u32,
    ) -> MarketDataResult<HashMap<Figi, Vec<Candle>>> {
        let candles = self
            .cache
            .load_or_fetch(
                &CacheNames::position_candles(account_id, n_days),
                || self.fetcher.fetch_candles(shares, n_days),
                self.force_update,
            )
            .await?;
        Ok(candles)
    }

    /// Shares, their last prices and the account's positions
    pub async fn snapshot(&self, account_id: &str) -> MarketDataResult<MarketSnapshot> {
        let priced_shares = async {
            let shares = self.shares().await?;
            let prices = self.last_prices(&shares).await?;
            Ok::<_, MarketDataError>((shares, prices))
        };

        let ((shares, last_prices), positions) =
            tokio::try_join!(priced_shares, self.positions(account_id))?;

        info!(
            "Loaded {} shares, {} positions, {} last prices",
            shares.len(),
            positions.len(),
            last_prices.len()
        );
        Ok(MarketSnapshot::new(shares, positions, last_prices))
    }

    /// Snapshot plus the account's share holdings in `currency` with
    /// `n_days` of candles each
    pub async fn holdings(
        &self,
        account_id: &str,
        currency: &str,
        n_days: u32,
    ) -> MarketDataResult<(MarketSnapshot, Vec<Holding>)> {
        let snapshot = self.snapshot(account_id).await?;

        let held: Vec<Share> = snapshot
            .held_shares(currency)
            .into_iter()
            .map(|(_, share)| share.clone())
            .collect();
        let candles = self.candles(account_id, &held, n_days).await?;

        let holdings = snapshot.holdings(currency, &candles);
        Ok((snapshot, holdings))
    }
}
