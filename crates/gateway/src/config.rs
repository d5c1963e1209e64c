//! Gateway configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production REST gateway
pub const PRODUCTION_URL: &str = "https://invest-public-api.tinkoff.ru/rest";

/// Sandbox REST gateway
pub const SANDBOX_URL: &str = "https://sandbox-invest-public-api.tinkoff.ru/rest";

/// Connection settings for the REST gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Sent as `x-app-name` when set
    pub app_name: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: PRODUCTION_URL.to_string(),
            timeout_secs: 30,
            app_name: None,
        }
    }
}

impl GatewayConfig {
    /// Sandbox gateway with default settings
    pub fn sandbox() -> Self {
        Self {
            base_url: SANDBOX_URL.to_string(),
            ..Default::default()
        }
    }

    /// Point at a different base URL (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// REST method paths
///
/// Each invest API method is reached at `{base_url}/{package}.{Service}/{Method}`.
pub struct Services;

impl Services {
    /// Protobuf package of the contract
    pub const PACKAGE: &'static str = "tinkoff.public.invest.api.contract.v1";

    /// Path of `service/method` under the base URL
    pub fn path(service: &str, method: &str) -> String {
        format!("{}.{}/{}", Self::PACKAGE, service, method)
    }

    /// `InstrumentsService/Shares`
    pub fn shares() -> String {
        Self::path("InstrumentsService", "Shares")
    }

    /// `OperationsService/GetPositions`
    pub fn positions() -> String {
        Self::path("OperationsService", "GetPositions")
    }

    /// `MarketDataService/GetLastPrices`
    pub fn last_prices() -> String {
        Self::path("MarketDataService", "GetLastPrices")
    }

    /// `MarketDataService/GetCandles`
    pub fn candles() -> String {
        Self::path("MarketDataService", "GetCandles")
    }

    /// `UsersService/GetAccounts`
    pub fn accounts() -> String {
        Self::path("UsersService", "GetAccounts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_paths() {
        assert_eq!(
            Services::shares(),
            "tinkoff.public.invest.api.contract.v1.InstrumentsService/Shares"
        );
        assert_eq!(
            Services::candles(),
            "tinkoff.public.invest.api.contract.v1.MarketDataService/GetCandles"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = GatewayConfig::default().with_base_url("http://127.0.0.1:9000/rest/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/rest");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GatewayConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.base_url, PRODUCTION_URL);
        assert_eq!(config.timeout_secs, 5);
    }
}
