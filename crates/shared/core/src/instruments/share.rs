use serde::{Deserialize, Serialize};

use super::Figi;

/// Share kind as reported by the invest API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareType {
    Common,
    Preferred,
    Adr,
    Gdr,
    Mlp,
    NyRegShrs,
    ClosedEndFund,
    Reit,
    Unspecified,
    /// A kind this build does not know about, kept verbatim
    Other(String),
}

impl ShareType {
    /// Parse the provider's enum name (`SHARE_TYPE_COMMON`, ...)
    pub fn from_provider(name: &str) -> Self {
        match name {
            "SHARE_TYPE_COMMON" => Self::Common,
            "SHARE_TYPE_PREFERRED" => Self::Preferred,
            "SHARE_TYPE_ADR" => Self::Adr,
            "SHARE_TYPE_GDR" => Self::Gdr,
            "SHARE_TYPE_MLP" => Self::Mlp,
            "SHARE_TYPE_NY_REG_SHRS" => Self::NyRegShrs,
            "SHARE_TYPE_CLOSED_END_FUND" => Self::ClosedEndFund,
            "SHARE_TYPE_REIT" => Self::Reit,
            "" | "SHARE_TYPE_UNSPECIFIED" => Self::Unspecified,
            other => Self::Other(other.to_string()),
        }
    }

    /// The provider's enum name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Common => "SHARE_TYPE_COMMON",
            Self::Preferred => "SHARE_TYPE_PREFERRED",
            Self::Adr => "SHARE_TYPE_ADR",
            Self::Gdr => "SHARE_TYPE_GDR",
            Self::Mlp => "SHARE_TYPE_MLP",
            Self::NyRegShrs => "SHARE_TYPE_NY_REG_SHRS",
            Self::ClosedEndFund => "SHARE_TYPE_CLOSED_END_FUND",
            Self::Reit => "SHARE_TYPE_REIT",
            Self::Unspecified => "SHARE_TYPE_UNSPECIFIED",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ShareType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A share listed on an exchange
///
/// Immutable once fetched. Flags mirror the provider's tradability and
/// eligibility markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub figi: Figi,
    pub ticker: String,
    pub name: String,
    /// Listing class (board), e.g. `TQBR`
    pub class_code: String,
    pub isin: String,
    pub exchange: String,
    pub sector: String,
    /// Underlying units per lot
    pub lot: u32,
    /// Lowercase ISO currency code, e.g. `rub`
    pub currency: String,
    /// Two-letter country code, e.g. `RU`
    pub country_of_risk: String,
    pub share_type: ShareType,
    pub otc: bool,
    pub buy_available: bool,
    pub sell_available: bool,
    pub for_qualified_investors: bool,
    pub api_trade_available: bool,
}

impl Share {
    /// Minimal share with the given identity; every flag permissive
    pub fn new(figi: impl Into<Figi>, ticker: impl Into<String>, lot: u32) -> Self {
        Self {
            figi: figi.into(),
            ticker: ticker.into(),
            name: String::new(),
            class_code: String::new(),
            isin: String::new(),
            exchange: String::new(),
            sector: String::new(),
            lot,
            currency: String::new(),
            country_of_risk: String::new(),
            share_type: ShareType::Unspecified,
            otc: false,
            buy_available: true,
            sell_available: true,
            for_qualified_investors: false,
            api_trade_available: true,
        }
    }

    /// Price of one lot given a per-unit price
    pub fn lot_price(&self, unit_price: f64) -> f64 {
        unit_price * self.lot as f64
    }

    /// Both buy and sell are open
    pub fn is_tradable(&self) -> bool {
        self.buy_available && self.sell_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_type_round_trips_provider_names() {
        for name in ["SHARE_TYPE_COMMON", "SHARE_TYPE_PREFERRED", "SHARE_TYPE_REIT"] {
            assert_eq!(ShareType::from_provider(name).as_str(), name);
        }
        assert_eq!(ShareType::from_provider(""), ShareType::Unspecified);
        assert_eq!(
            ShareType::from_provider("SHARE_TYPE_NEW_THING"),
            ShareType::Other("SHARE_TYPE_NEW_THING".to_string())
        );
    }

    #[test]
    fn test_lot_price() {
        let share = Share::new("BBG004730N88", "SBER", 10);
        assert_eq!(share.lot_price(250.5), 2505.0);
    }

    #[test]
    fn test_tradable_requires_both_sides() {
        let mut share = Share::new("BBG004730N88", "SBER", 10);
        assert!(share.is_tradable());
        share.sell_available = false;
        assert!(!share.is_tradable());
    }
}
