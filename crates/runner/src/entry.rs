//! Blocking entry points
//!
//! Each call builds its own tokio runtime, so none of these may be called
//! from inside an async context.

use crate::app::{Charts, Folio};
use crate::config::AppConfig;
use crate::credentials::{Credentials, load_credentials};
use crate::error::{RunnerError, RunnerResult};
use crate::report::{format_share_table, write_shares_csv};
use folio_analytics::ShareRow;
use folio_core::Account;
use log::error;
use std::error::Error as _;
use std::future::Future;
use std::path::Path;

/// Default credentials file for the share discovery entry point
pub const CREDENTIALS_FILE: &str = "credentials.json";

fn block_on<T>(future: impl Future<Output = RunnerResult<T>>) -> RunnerResult<T> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| RunnerError::Runtime(e.to_string()))?;
    runtime.block_on(future)
}

/// Charts of the account's holdings with default configuration.
///
/// Returns (treemap fragment, value chart fragment).
pub fn visualize(token: &str, account_id: &str, n_days: u32) -> RunnerResult<(String, String)> {
    let charts = visualize_with(&AppConfig::default(), token, account_id, n_days)?;
    Ok(charts.into_fragments())
}

pub fn visualize_with(
    config: &AppConfig,
    token: &str,
    account_id: &str,
    n_days: u32,
) -> RunnerResult<Charts> {
    block_on(async {
        let folio = Folio::connect(config.clone(), token)?;
        folio.visualize(account_id, n_days).await
    })
}

/// Outcome of a visualization request as shown to a user
#[derive(Debug, Clone, PartialEq)]
pub enum Visualization {
    Charts { ratios: String, value: String },
    /// Error message followed by its chain of causes
    Failed(String),
}

/// Like [`visualize`], but any failure becomes a displayable message
pub fn visualize_or_error(token: &str, account_id: &str, n_days: u32) -> Visualization {
    visualize_or_error_with(&AppConfig::default(), token, account_id, n_days)
}

pub fn visualize_or_error_with(
    config: &AppConfig,
    token: &str,
    account_id: &str,
    n_days: u32,
) -> Visualization {
    match visualize_with(config, token, account_id, n_days) {
        Ok(charts) => {
            let (ratios, value) = charts.into_fragments();
            Visualization::Charts { ratios, value }
        }
        Err(e) => {
            error!("Visualization failed: {}", e);
            Visualization::Failed(error_chain(&e))
        }
    }
}

fn error_chain(err: &RunnerError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    message
}

/// Share discovery with default configuration and `credentials.json`.
///
/// Writes `<results_dir>/shares.csv` and prints the ranked table.
pub fn get_underrepresented_shares(force_update: bool) -> RunnerResult<Vec<ShareRow>> {
    let credentials = load_credentials(CREDENTIALS_FILE)?;
    underrepresented_shares_with(&AppConfig::default(), &credentials, force_update)
}

pub fn underrepresented_shares_with(
    config: &AppConfig,
    credentials: &Credentials,
    force_update: bool,
) -> RunnerResult<Vec<ShareRow>> {
    let rows = block_on(async {
        let folio = Folio::connect(config.clone(), &credentials.token)?;
        folio
            .underrepresented_shares(&credentials.account_id, force_update)
            .await
    })?;

    print_shares(&rows, &config.results_dir)?;
    Ok(rows)
}

/// Print the ranked table and save it as CSV under `results_dir`
pub fn print_shares(rows: &[ShareRow], results_dir: &Path) -> RunnerResult<()> {
    println!("Number of shares: {}\n", rows.len());
    print!("{}", format_share_table(rows));
    write_shares_csv(results_dir, rows)?;
    Ok(())
}

/// Accounts visible to `token`, `None` if the token is rejected
pub fn list_accounts(token: &str) -> RunnerResult<Option<Vec<Account>>> {
    list_accounts_with(&AppConfig::default(), token)
}

pub fn list_accounts_with(config: &AppConfig, token: &str) -> RunnerResult<Option<Vec<Account>>> {
    block_on(async {
        let folio = Folio::connect(config.clone(), token)?;
        folio.accounts().await
    })
}
