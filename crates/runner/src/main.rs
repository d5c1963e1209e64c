use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_runner::report::write_charts;
use folio_runner::{
    AppConfig, MAX_N_DAYS, list_accounts_with, load_config, load_credentials,
    underrepresented_shares_with, visualize_with,
};
use log::info;
use std::path::PathBuf;

/// Portfolio charts and share discovery for a brokerage account
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Args {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file with `token` and `account_id`
    #[arg(long, global = true, default_value = "credentials.json")]
    credentials: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the portfolio treemap and value chart
    Visualize {
        /// Days of history in the value chart
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_N_DAYS as i64))]
        n_days: Option<u32>,
        /// Output directory, defaults to the results directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List tradable shares not held yet, cheapest lot first
    Underrepresented {
        /// Reuse cached responses instead of refreshing them
        #[arg(long)]
        cached: bool,
    },
    /// List accounts visible to the token
    Accounts,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    let credentials = load_credentials(&args.credentials)
        .with_context(|| format!("loading credentials from {}", args.credentials.display()))?;

    match args.command {
        Command::Visualize { n_days, out } => {
            let n_days = n_days.unwrap_or(config.n_days);
            let charts = visualize_with(&config, &credentials.token, &credentials.account_id, n_days)
                .context("building portfolio charts")?;

            let out = out.unwrap_or_else(|| config.results_dir.clone());
            for path in write_charts(&out, &charts)? {
                info!("Saved {}", path.display());
            }
        }
        Command::Underrepresented { cached } => {
            underrepresented_shares_with(&config, &credentials, !cached)
                .context("screening shares")?;
        }
        Command::Accounts => {
            match list_accounts_with(&config, &credentials.token).context("listing accounts")? {
                Some(accounts) => {
                    for account in accounts {
                        println!(
                            "{}\t{}\t{}\t{}",
                            account.id, account.name, account.kind, account.status
                        );
                    }
                }
                None => anyhow::bail!("the token was rejected"),
            }
        }
    }

    Ok(())
}
