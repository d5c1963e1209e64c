//! Folio Runner
//!
//! Wires the gateway, cache, market data and analytics into the user-facing
//! pipelines:
//!
//! - **Visualize**: treemap of share positions by sector with returns, plus
//!   the portfolio value over time
//! - **Underrepresented shares**: tradable domestic shares not held yet,
//!   cheapest lot first, printed and saved as CSV
//! - **Accounts**: accounts visible to a token
//!
//! ## Flow
//!
//! ```text
//!   credentials ──► RestClient ──► MarketDataLoader ──► holdings ──► charts ──► HTML
//!                                  (request cache)        │
//!                                                         └──► screener ──► CSV
//! ```

pub mod app;
pub mod config;
pub mod credentials;
pub mod entry;
pub mod error;
pub mod report;

pub use app::{Charts, Folio};
pub use config::{AppConfig, ConfigError, MAX_N_DAYS, check_n_days, load_config, load_config_from_str};
pub use credentials::{Credentials, load_credentials};
pub use entry::{
    Visualization, get_underrepresented_shares, list_accounts, list_accounts_with, print_shares,
    underrepresented_shares_with, visualize, visualize_or_error, visualize_or_error_with,
    visualize_with,
};
pub use error::{RunnerError, RunnerResult};
