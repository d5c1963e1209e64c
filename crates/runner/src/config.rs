//! Application configuration
//!
//! Loaded from a JSON file. Every field is optional:
//!
//! ```json
//! {
//!   "cache_dir": "cache",
//!   "results_dir": "result",
//!   "n_days": 10,
//!   "api": { "base_url": "https://sandbox-invest-public-api.tinkoff.ru/rest" },
//!   "screener": { "max_price": 3000 }
//! }
//! ```

use folio_analytics::ScreenerConfig;
use folio_gateway::GatewayConfig;
use folio_market_data::FetchConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory of the request cache
    pub cache_dir: PathBuf,
    /// Directory for CSV and HTML output
    pub results_dir: PathBuf,
    /// Refresh cached requests
    pub force_update: bool,
    /// Candle history for the value chart, in days
    pub n_days: u32,
    /// Treemap returns compare against the close this many days back
    pub return_days: u32,
    /// Percent of extreme returns ignored by the color scale
    pub outliers_pct: f64,
    /// Bound for a single candle request
    pub request_timeout_secs: u64,
    pub api: GatewayConfig,
    pub screener: ScreenerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache"),
            results_dir: PathBuf::from("result"),
            force_update: true,
            n_days: 10,
            return_days: 1,
            outliers_pct: 10.0,
            request_timeout_secs: 30,
            api: GatewayConfig::default(),
            screener: ScreenerConfig::default(),
        }
    }
}

/// Load configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Longest history a chart may cover, roughly a century
pub const MAX_N_DAYS: u32 = 36_500;

/// Check a chart length given in days
pub fn check_n_days(n_days: u32) -> Result<(), ConfigError> {
    if n_days == 0 {
        return Err(ConfigError::Invalid("n_days must be at least 1".into()));
    }
    if n_days > MAX_N_DAYS {
        return Err(ConfigError::Invalid(format!(
            "n_days must be at most {}, got {}",
            MAX_N_DAYS, n_days
        )));
    }
    Ok(())
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screener.max_price <= Decimal::ZERO {
            return Err(ConfigError::Invalid("screener.max_price must be positive".into()));
        }
        check_n_days(self.n_days)?;
        if self.return_days > MAX_N_DAYS {
            return Err(ConfigError::Invalid(format!(
                "return_days must be at most {}, got {}",
                MAX_N_DAYS, self.return_days
            )));
        }
        if !(0.0..100.0).contains(&self.outliers_pct) {
            return Err(ConfigError::Invalid(format!(
                "outliers_pct must be in [0, 100), got {}",
                self.outliers_pct
            )));
        }
        Ok(())
    }

    /// Candle fetch settings
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchConfig::default()
        }
    }

    /// Days of candles the visualization needs: the chart window plus
    /// enough room to find the reference close across a long weekend
    pub fn candle_lookback(&self, n_days: u32) -> u32 {
        n_days.max(self.return_days.saturating_add(7))
    }
}
