//! Brokerage credentials
//!
//! ```json
//! { "token": "t.XXXX", "account_id": 2000123456 }
//! ```
//!
//! `account_id` may be written as a string or a number.

use crate::config::ConfigError;
use serde::{Deserialize, Deserializer};
use std::path::Path;

#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub token: String,
    #[serde(deserialize_with = "account_id_as_string")]
    pub account_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl Credentials {
    pub fn new(token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            account_id: account_id.into(),
        }
    }
}

fn account_id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AccountId {
        Text(String),
        Number(u64),
    }

    Ok(match AccountId::deserialize(deserializer)? {
        AccountId::Text(s) => s,
        AccountId::Number(n) => n.to_string(),
    })
}

/// Load credentials from a JSON file
pub fn load_credentials<P: AsRef<Path>>(path: P) -> Result<Credentials, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let credentials: Credentials = serde_json::from_str(&content)?;
    if credentials.token.trim().is_empty() {
        return Err(ConfigError::Invalid("token is empty".into()));
    }
    Ok(credentials)
}
