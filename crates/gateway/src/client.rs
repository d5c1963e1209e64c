//! REST client for the invest API gateway

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{Account, Candle, CandleInterval, Figi, LastPrice, Position, Share};
use folio_ports::{ApiResult, InvestApi};
use log::debug;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::{GatewayConfig, Services};
use crate::error::{ErrorBody, RestError};
use crate::messages::{
    GetAccountsRequest, GetAccountsResponse, GetCandlesRequest, GetCandlesResponse,
    GetLastPricesRequest, GetLastPricesResponse, GetPositionsRequest, GetPositionsResponse,
    SharesRequest, SharesResponse,
};

/// REST API client for the invest API
/// Infrastructure component - handles HTTP communication
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    config: GatewayConfig,
    token: String,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the token
        f.debug_struct("RestClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl RestClient {
    pub fn new(config: GatewayConfig, token: impl Into<String>) -> Result<Self, RestError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(RestClient {
            client,
            config,
            token: token.into(),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get all API-tradable shares
    pub async fn get_shares(&self) -> Result<SharesResponse, RestError> {
        self.post(&Services::shares(), &SharesRequest::default())
            .await
    }

    /// Get securities held on an account
    pub async fn get_positions(&self, account_id: &str) -> Result<GetPositionsResponse, RestError> {
        let req = GetPositionsRequest {
            account_id: account_id.to_string(),
        };
        self.post(&Services::positions(), &req).await
    }

    /// Get last prices for a set of instruments
    pub async fn get_last_prices(&self, figis: &[Figi]) -> Result<GetLastPricesResponse, RestError> {
        let req = GetLastPricesRequest {
            figi: figis.iter().map(|f| f.to_string()).collect(),
        };
        self.post(&Services::last_prices(), &req).await
    }

    /// Get candles of one instrument in `[from, to]`
    pub async fn get_candles(
        &self,
        figi: &Figi,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        interval: CandleInterval,
    ) -> Result<GetCandlesResponse, RestError> {
        let req = GetCandlesRequest::new(figi, from, to, interval);
        self.post(&Services::candles(), &req).await
    }

    /// Get accounts of the token owner
    pub async fn get_accounts(&self) -> Result<GetAccountsResponse, RestError> {
        self.post(&Services::accounts(), &GetAccountsRequest::default())
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        let url = format!("{}/{}", self.config.base_url, path);
        debug!("POST {}", url);

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .json(body);
        if let Some(app_name) = &self.config.app_name {
            request = request.header("x-app-name", app_name);
        }

        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, RestError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or_else(|_| ErrorBody {
                code: 0,
                message: String::new(),
                description: format!("HTTP {}: {}", status, text),
            });
            return Err(RestError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&text).map_err(|e| RestError::Parse(e.to_string()))
    }
}

/// Implement InvestApi port for RestClient (Dependency Inversion)
///
/// Converts infrastructure RestError to port ApiError so the pipelines only
/// ever see the port's error taxonomy.
#[async_trait]
impl InvestApi for RestClient {
    async fn shares(&self) -> ApiResult<Vec<Share>> {
        Ok(self.get_shares().await?.into_shares())
    }

    async fn positions(&self, account_id: &str) -> ApiResult<Vec<Position>> {
        Ok(self.get_positions(account_id).await?.into_positions())
    }

    async fn last_prices(&self, figis: &[Figi]) -> ApiResult<Vec<LastPrice>> {
        // an empty filter means "everything" to the provider
        if figis.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.get_last_prices(figis).await?.into_last_prices())
    }

    async fn candles(
        &self,
        figi: &Figi,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        interval: CandleInterval,
    ) -> ApiResult<Vec<Candle>> {
        Ok(self
            .get_candles(figi, from, to, interval)
            .await?
            .into_candles(figi))
    }

    async fn accounts(&self) -> ApiResult<Vec<Account>> {
        Ok(self.get_accounts().await?.into_accounts())
    }
}
