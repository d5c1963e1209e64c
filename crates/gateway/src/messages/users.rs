//! UsersService messages

use folio_core::Account;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetAccountsRequest {}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetAccountsResponse {
    pub accounts: Vec<AccountWire>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountWire {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub status: String,
}

impl From<AccountWire> for Account {
    fn from(w: AccountWire) -> Self {
        Account {
            id: w.id,
            name: w.name,
            kind: w.kind,
            status: w.status,
        }
    }
}

impl GetAccountsResponse {
    pub fn into_accounts(self) -> Vec<Account> {
        self.accounts.into_iter().map(Account::from).collect()
    }
}
