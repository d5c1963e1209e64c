//! Async pipelines over the invest API

use crate::config::{AppConfig, ConfigError, check_n_days};
use crate::error::RunnerResult;
use chrono::Duration;
use folio_analytics::{
    ChartRenderer, PlotlyRenderer, RatioChart, Screener, ShareRow, ValueSeries, color_range,
};
use folio_cache::{DiskCache, RequestCache};
use folio_clock::SystemClock;
use folio_core::Account;
use folio_gateway::RestClient;
use folio_market_data::MarketDataLoader;
use folio_ports::{CacheStore, Clock, InvestApi};
use log::{info, warn};
use std::sync::Arc;

/// Rendered portfolio charts and the datasets behind them
#[derive(Debug, Clone)]
pub struct Charts {
    pub ratios_html: String,
    pub value_html: String,
    pub ratios: RatioChart,
    pub values: ValueSeries,
    /// Color scale bound of the treemap
    pub range: Option<f64>,
}

impl Charts {
    /// (treemap fragment, value chart fragment)
    pub fn into_fragments(self) -> (String, String) {
        (self.ratios_html, self.value_html)
    }
}

/// Pipelines bound to one API client, clock and cache
pub struct Folio {
    config: AppConfig,
    api: Arc<dyn InvestApi>,
    clock: Arc<dyn Clock>,
    store: Arc<dyn CacheStore>,
}

impl Folio {
    /// Pipelines caching to `config.cache_dir`
    pub fn new(config: AppConfig, api: Arc<dyn InvestApi>, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(DiskCache::new(config.cache_dir.clone()));
        Self {
            config,
            api,
            clock,
            store,
        }
    }

    /// Pipelines over the REST gateway with the system clock
    pub fn connect(config: AppConfig, token: &str) -> RunnerResult<Self> {
        let client = RestClient::new(config.api.clone(), token)?;
        Ok(Self::new(config, Arc::new(client), Arc::new(SystemClock::new())))
    }

    /// Replace the cache store
    pub fn with_store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.store = store;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn loader(&self, force_update: bool) -> MarketDataLoader {
        let cache = RequestCache::new(self.store.clone());
        MarketDataLoader::new(self.api.clone(), cache, self.clock.clone())
            .with_fetch_config(self.config.fetch_config())
            .with_force_update(force_update)
    }

    /// Treemap of the account's domestic share positions and the portfolio
    /// value over the last `n_days`
    pub async fn visualize(&self, account_id: &str, n_days: u32) -> RunnerResult<Charts> {
        check_n_days(n_days)?;
        let loader = self.loader(self.config.force_update);
        let currency = &self.config.screener.currency;
        let (_, holdings) = loader
            .holdings(account_id, currency, self.config.candle_lookback(n_days))
            .await?;
        info!("Visualizing {} holdings", holdings.len());

        let now = self.clock.now();
        let ratios = RatioChart::from_holdings(&holdings, self.config.return_days, now);
        let range = color_range(&ratios.returns(), self.config.outliers_pct);

        let mut values = ValueSeries::from_holdings(&holdings);
        let since = now
            .checked_sub_signed(Duration::days(n_days as i64))
            .ok_or_else(|| ConfigError::Invalid(format!("cannot look back {} days", n_days)))?;
        values.points.retain(|p| p.time >= since);

        let renderer = PlotlyRenderer::default();
        Ok(Charts {
            ratios_html: renderer.render_ratios(&ratios, range),
            value_html: renderer.render_value_series(&values),
            ratios,
            values,
            range,
        })
    }

    /// Eligible shares not held on the account, cheapest lot first
    pub async fn underrepresented_shares(
        &self,
        account_id: &str,
        force_update: bool,
    ) -> RunnerResult<Vec<ShareRow>> {
        let snapshot = self.loader(force_update).snapshot(account_id).await?;

        let screener = Screener::new(self.config.screener.clone());
        let rows = screener.screen(
            &snapshot.shares,
            &snapshot.held_figis(),
            &snapshot.last_prices_by_figi(),
            self.clock.now(),
        );
        info!("{} of {} shares are eligible", rows.len(), snapshot.shares.len());
        Ok(rows)
    }

    /// Accounts of the token owner, `None` when the token is rejected
    pub async fn accounts(&self) -> RunnerResult<Option<Vec<Account>>> {
        match self.api.accounts().await {
            Ok(accounts) => Ok(Some(accounts)),
            Err(e) if e.is_authentication() => {
                warn!("Token rejected: {}", e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
