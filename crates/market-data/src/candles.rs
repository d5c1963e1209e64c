//! Paged historical candle fetcher

use crate::error::{MarketDataError, MarketDataResult};
use crate::window::{CandleWindow, WindowStep, classify_attempt};
use folio_core::{Candle, CandleInterval, Figi, Share};
use folio_ports::{ApiError, ApiResult, Clock, InvestApi};
use futures_util::future::try_join_all;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Candle fetch settings
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub interval: CandleInterval,
    /// Upper bound for a single candle request
    pub request_timeout: Duration,
    /// Requests allowed per instrument before giving up
    pub max_attempts: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            interval: CandleInterval::Day,
            request_timeout: Duration::from_secs(30),
            max_attempts: 512,
        }
    }
}

/// Fetches `n_days` of candles per instrument, narrowing the request window
/// whenever the provider rejects its length.
pub struct CandleFetcher {
    api: Arc<dyn InvestApi>,
    clock: Arc<dyn Clock>,
    config: FetchConfig,
}

impl CandleFetcher {
    pub fn new(api: Arc<dyn InvestApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            clock,
            config: FetchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Candles for every instrument, keyed by FIGI.
    ///
    /// Instruments are fetched concurrently. The first fatal error is
    /// returned and the remaining fetches are dropped.
    pub async fn fetch_candles(
        &self,
        instruments: &[Share],
        n_days: u32,
    ) -> MarketDataResult<HashMap<Figi, Vec<Candle>>> {
        let window = self.lookback(n_days)?;
        info!(
            "Fetching {} days of candles for {} instruments",
            n_days,
            instruments.len()
        );

        let fetches = instruments.iter().map(|share| async move {
            let candles = self.fetch_window(&share.figi, window).await?;
            Ok::<_, MarketDataError>((share.figi.clone(), candles))
        });

        let fetched = try_join_all(fetches).await?;
        Ok(fetched.into_iter().collect())
    }

    /// Candles of one instrument for the last `n_days`
    pub async fn fetch_instrument(&self, figi: &Figi, n_days: u32) -> MarketDataResult<Vec<Candle>> {
        let window = self.lookback(n_days)?;
        self.fetch_window(figi, window).await
    }

    /// Window ending now and reaching `n_days` back
    fn lookback(&self, n_days: u32) -> MarketDataResult<CandleWindow> {
        CandleWindow::lookback(self.clock.now(), n_days)
            .ok_or(MarketDataError::LookbackOutOfRange { n_days })
    }

    /// Run the narrowing loop for one instrument starting from `initial`
    pub async fn fetch_window(
        &self,
        figi: &Figi,
        initial: CandleWindow,
    ) -> MarketDataResult<Vec<Candle>> {
        let mut window = initial;

        for _ in 0..self.config.max_attempts {
            debug!("Requesting candles for {} in {}", figi, window);
            let result = self.request(figi, &window).await;

            match classify_attempt(result, &window) {
                WindowStep::Done(candles) => {
                    if window != initial {
                        warn!(
                            "Candles for {} cover only {} of the requested {}",
                            figi, window, initial
                        );
                    }
                    return Ok(candles);
                }
                WindowStep::Narrow(next) => {
                    warn!("Request period too long for {}, narrowing to {}", figi, next);
                    window = next;
                }
                WindowStep::Fatal(ApiError::RangeExceeded(message)) => {
                    return Err(MarketDataError::WindowExhausted {
                        figi: figi.clone(),
                        message,
                    });
                }
                WindowStep::Fatal(err) => return Err(err.into()),
            }
        }

        Err(MarketDataError::TooManyAttempts {
            figi: figi.clone(),
            attempts: self.config.max_attempts,
        })
    }

    async fn request(&self, figi: &Figi, window: &CandleWindow) -> ApiResult<Vec<Candle>> {
        let call = self
            .api
            .candles(figi, window.from, window.to, self.config.interval);

        match tokio::time::timeout(self.config.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout),
        }
    }
}
