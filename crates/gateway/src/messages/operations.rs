//! OperationsService messages

use folio_core::{InstrumentType, Position};
use serde::{Deserialize, Serialize};

use super::wire::de_i64;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPositionsRequest {
    pub account_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetPositionsResponse {
    pub securities: Vec<PositionSecurityWire>,
}

/// Securities balance entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionSecurityWire {
    pub figi: String,
    #[serde(deserialize_with = "de_i64")]
    pub balance: i64,
    #[serde(deserialize_with = "de_i64")]
    pub blocked: i64,
    pub instrument_type: String,
}

impl From<PositionSecurityWire> for Position {
    fn from(w: PositionSecurityWire) -> Self {
        Position {
            figi: w.figi.into(),
            balance: w.balance,
            blocked: w.blocked,
            instrument_type: InstrumentType::from_provider(&w.instrument_type),
        }
    }
}

impl GetPositionsResponse {
    pub fn into_positions(self) -> Vec<Position> {
        self.securities.into_iter().map(Position::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_positions() {
        let json = r#"{
            "money": [{"currency": "rub", "units": "1500", "nano": 0}],
            "securities": [
                {"figi": "BBG004730N88", "balance": "30", "blocked": "0", "instrumentType": "share"},
                {"figi": "BBG00T22WKV5", "balance": 5, "instrumentType": "bond"}
            ],
            "limitsLoadingInProgress": false
        }"#;

        let positions = serde_json::from_str::<GetPositionsResponse>(json)
            .unwrap()
            .into_positions();

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].balance, 30);
        assert!(positions[0].is_share());
        assert_eq!(positions[1].instrument_type, InstrumentType::Bond);
        assert_eq!(positions[1].blocked, 0);
    }

    #[test]
    fn test_request_body() {
        let req = GetPositionsRequest {
            account_id: "2000123456".into(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"accountId":"2000123456"}"#
        );
    }
}
