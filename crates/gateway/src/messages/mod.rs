//! Wire message types for the REST gateway
//!
//! Payloads follow the protobuf JSON mapping: lowerCamelCase names,
//! default values omitted, int64 values usually sent as strings.
//! Every response type converts into `folio-core` domain types.

pub mod instruments;
pub mod market_data;
pub mod operations;
pub mod users;
pub mod wire;

pub use instruments::{InstrumentStatus, ShareWire, SharesRequest, SharesResponse};
pub use market_data::{
    CandleWire, GetCandlesRequest, GetCandlesResponse, GetLastPricesRequest,
    GetLastPricesResponse, LastPriceWire,
};
pub use operations::{GetPositionsRequest, GetPositionsResponse, PositionSecurityWire};
pub use users::{AccountWire, GetAccountsRequest, GetAccountsResponse};
pub use wire::QuotationWire;
