//! InstrumentsService messages

use folio_core::{Share, ShareType};
use serde::{Deserialize, Serialize};

/// Which instruments to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstrumentStatus {
    /// Instruments tradable through the API
    #[serde(rename = "INSTRUMENT_STATUS_BASE")]
    Base,
    /// Every instrument the provider knows
    #[serde(rename = "INSTRUMENT_STATUS_ALL")]
    All,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharesRequest {
    pub instrument_status: InstrumentStatus,
}

impl Default for SharesRequest {
    fn default() -> Self {
        Self {
            instrument_status: InstrumentStatus::Base,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SharesResponse {
    pub instruments: Vec<ShareWire>,
}

/// Share as sent by the gateway (unused fields are ignored)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareWire {
    pub figi: String,
    pub ticker: String,
    pub class_code: String,
    pub isin: String,
    pub lot: u32,
    pub currency: String,
    pub name: String,
    pub exchange: String,
    pub sector: String,
    pub country_of_risk: String,
    pub share_type: String,
    pub otc_flag: bool,
    pub buy_available_flag: bool,
    pub sell_available_flag: bool,
    pub for_qual_investor_flag: bool,
    pub api_trade_available_flag: bool,
}

impl From<ShareWire> for Share {
    fn from(w: ShareWire) -> Self {
        Share {
            figi: w.figi.into(),
            ticker: w.ticker,
            name: w.name,
            class_code: w.class_code,
            isin: w.isin,
            exchange: w.exchange,
            sector: w.sector,
            lot: w.lot,
            currency: w.currency,
            country_of_risk: w.country_of_risk,
            share_type: ShareType::from_provider(&w.share_type),
            otc: w.otc_flag,
            buy_available: w.buy_available_flag,
            sell_available: w.sell_available_flag,
            for_qualified_investors: w.for_qual_investor_flag,
            api_trade_available: w.api_trade_available_flag,
        }
    }
}

impl SharesResponse {
    pub fn into_shares(self) -> Vec<Share> {
        self.instruments.into_iter().map(Share::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let json = serde_json::to_string(&SharesRequest::default()).unwrap();
        assert_eq!(json, r#"{"instrumentStatus":"INSTRUMENT_STATUS_BASE"}"#);
    }

    #[test]
    fn test_decode_share() {
        let json = r#"{
            "instruments": [{
                "figi": "BBG004730N88",
                "ticker": "SBER",
                "classCode": "TQBR",
                "isin": "RU0009029540",
                "lot": 10,
                "currency": "rub",
                "name": "Сбер Банк",
                "exchange": "MOEX_EVENING_WEEKEND",
                "sector": "financial",
                "countryOfRisk": "RU",
                "shareType": "SHARE_TYPE_COMMON",
                "buyAvailableFlag": true,
                "sellAvailableFlag": true,
                "apiTradeAvailableFlag": true,
                "issueSize": "21586948000",
                "nominal": {"currency": "rub", "units": "3", "nano": 0}
            }]
        }"#;

        let shares = serde_json::from_str::<SharesResponse>(json)
            .unwrap()
            .into_shares();

        assert_eq!(shares.len(), 1);
        let share = &shares[0];
        assert_eq!(share.figi.as_str(), "BBG004730N88");
        assert_eq!(share.lot, 10);
        assert_eq!(share.share_type, ShareType::Common);
        assert!(share.is_tradable());
        // omitted booleans are false
        assert!(!share.otc);
        assert!(!share.for_qualified_investors);
    }
}
