use serde::{Deserialize, Serialize};

/// Brokerage account visible to a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Provider account kind (`ACCOUNT_TYPE_TINKOFF`, `ACCOUNT_TYPE_TINKOFF_IIS`, ...)
    pub kind: String,
    /// Provider account status (`ACCOUNT_STATUS_OPEN`, ...)
    pub status: String,
}

impl Account {
    pub fn is_open(&self) -> bool {
        self.status == "ACCOUNT_STATUS_OPEN"
    }
}
