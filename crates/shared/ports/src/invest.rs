use async_trait::async_trait;
use folio_core::{Account, Candle, CandleInterval, Figi, LastPrice, Position, Share, Timestamp};

use crate::error::ApiResult;

/// Port for the brokerage invest API
///
/// Implementations:
/// - REST gateway client for production
/// - Scripted mocks for tests
///
/// Only `ApiError::RangeExceeded` is interpreted by the candle fetcher and
/// `ApiError::Authentication` by account listing; everything else is passed
/// through to the caller.
#[async_trait]
pub trait InvestApi: Send + Sync {
    /// All shares known to the provider
    async fn shares(&self) -> ApiResult<Vec<Share>>;

    /// Securities held on an account
    async fn positions(&self, account_id: &str) -> ApiResult<Vec<Position>>;

    /// Last traded prices for the given instruments
    async fn last_prices(&self, figis: &[Figi]) -> ApiResult<Vec<LastPrice>>;

    /// Candles of one instrument in `[from, to]`
    async fn candles(
        &self,
        figi: &Figi,
        from: Timestamp,
        to: Timestamp,
        interval: CandleInterval,
    ) -> ApiResult<Vec<Candle>>;

    /// Accounts visible to the credential
    async fn accounts(&self) -> ApiResult<Vec<Account>>;
}
