//! Error types for the market-data crate

use folio_cache::LoadError;
use folio_core::Figi;
use folio_ports::{ApiError, CacheError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// The provider rejected even the minimal one-day window
    #[error("Candle window for {figi} cannot be narrowed further: {message}")]
    WindowExhausted { figi: Figi, message: String },

    #[error("Cannot look back {n_days} days from now")]
    LookbackOutOfRange { n_days: u32 },

    #[error("Gave up on candles for {figi} after {attempts} attempts")]
    TooManyAttempts { figi: Figi, attempts: u32 },
}

impl<E: Into<MarketDataError>> From<LoadError<E>> for MarketDataError {
    fn from(err: LoadError<E>) -> Self {
        match err {
            LoadError::Fetch(e) => e.into(),
            LoadError::Cache(e) => MarketDataError::Cache(e),
        }
    }
}

pub type MarketDataResult<T> = std::result::Result<T, MarketDataError>;
