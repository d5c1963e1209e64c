//! Error types for the runner

use crate::config::ConfigError;
use folio_market_data::MarketDataError;
use folio_ports::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<folio_gateway::RestError> for RunnerError {
    fn from(err: folio_gateway::RestError) -> Self {
        RunnerError::Api(err.into())
    }
}

pub type RunnerResult<T> = std::result::Result<T, RunnerError>;
