//! `icp-account`: derive and inspect Internet Computer ledger account identifiers.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use walletd_icp::AccountConfig;

#[derive(Parser)]
#[command(name = "icp-account", version, about = "ICP ledger account identifier tools")]
struct Cli {
    /// Config file (JSON)
    #[arg(long, env = "ICP_ACCOUNT_CONFIG", default_value = AccountConfig::DEFAULT_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive the account identifier of a principal
    Derive {
        /// Textual principal, e.g. 2vxsx-fae
        #[arg(short, long)]
        principal: String,
        /// 32-byte sub-account as 64 hex characters
        #[arg(short, long, value_name = "HEX")]
        subaccount: Option<String>,
        /// Reject empty and over-long principals regardless of config
        #[arg(long)]
        strict: bool,
        /// Print JSON instead of the bare hex identifier
        #[arg(long)]
        json: bool,
    },
    /// Check the length, encoding and checksum of a hex account identifier
    Verify {
        #[arg(value_name = "HEX")]
        account_id: String,
    },
    /// Print the Candid-encoded `account_balance` argument for a principal
    BalanceArgs {
        #[arg(short, long)]
        principal: String,
        #[arg(short, long, value_name = "HEX")]
        subaccount: Option<String>,
        /// Reject empty and over-long principals regardless of config
        #[arg(long)]
        strict: bool,
    },
    /// Convert an e8s amount into whole tokens
    E8s { amount: u64 },
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AccountConfig::load(&cli.config)
        .with_context(|| format!("load config {}", cli.config.display()))?;
    tracing::debug!(network = %config.network.name, "config ready");

    let output = match cli.cmd {
        Command::Derive {
            principal,
            subaccount,
            strict,
            json,
        } => commands::derive(&config, &principal, subaccount.as_deref(), strict, json)?,
        Command::Verify { account_id } => commands::verify(&account_id)?,
        Command::BalanceArgs {
            principal,
            subaccount,
            strict,
        } => commands::balance_args(&config, &principal, subaccount.as_deref(), strict)?,
        Command::E8s { amount } => commands::e8s(amount),
        Command::Config => serde_json::to_string_pretty(&config)?,
    };
    println!("{output}");
    Ok(())
}
