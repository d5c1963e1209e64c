use serde::{Deserialize, Serialize};

use crate::instruments::Figi;

/// Kind of instrument a position is held in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    Share,
    Bond,
    Etf,
    Currency,
    Future,
    Option,
    Other(String),
}

impl InstrumentType {
    /// Parse the provider's lowercase tag (`share`, `bond`, ...)
    pub fn from_provider(tag: &str) -> Self {
        match tag {
            "share" => Self::Share,
            "bond" => Self::Bond,
            "etf" => Self::Etf,
            "currency" => Self::Currency,
            "futures" | "future" => Self::Future,
            "option" => Self::Option,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Securities balance held on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Instrument held
    pub figi: Figi,

    /// Quantity of underlying units (not lots)
    pub balance: i64,

    /// Units blocked by active orders
    pub blocked: i64,

    /// Instrument kind tag
    pub instrument_type: InstrumentType,
}

impl Position {
    /// Create a new position
    pub fn new(figi: impl Into<Figi>, balance: i64, instrument_type: InstrumentType) -> Self {
        Self {
            figi: figi.into(),
            balance,
            blocked: 0,
            instrument_type,
        }
    }

    /// Check if the position is held in a share
    pub fn is_share(&self) -> bool {
        self.instrument_type == InstrumentType::Share
    }

    /// Value of the balance at the given unit price
    pub fn value_at(&self, unit_price: f64) -> f64 {
        self.balance as f64 * unit_price
    }
}
