//! kaspactl - Kaspa wallet command line
//!
//! Thin CLI over the library: query tools against the public REST
//! indexer, wallet identity checks, and mnemonic generation. Funded
//! sends are a library concern (`kaspactl::send_funds`) because they
//! need a node transport and a transaction generator wired in by the
//! embedding application.

#![deny(unused_imports)]
#![deny(unused_mut)]
#![warn(unused_must_use)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kaspactl::api;
use kaspactl::config::Config;
use kaspactl::tools::{
    generate_mnemonic, get_balance, get_fee_estimate, get_my_address, get_transaction,
    health_check, GenerateMnemonicParams, GetBalanceParams, GetTransactionParams,
};
use kaspactl::types::NetworkId;
use kaspactl::wallet;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the wallet's receive address
    Address,
    /// Balance and UTXO count for an address
    Balance {
        /// Address to query; defaults to the wallet's own address
        address: Option<String>,
    },
    /// Current network fee-rate buckets
    FeeEstimate,
    /// Look up a transaction by id
    Transaction { tx_id: String },
    /// Check wallet configuration and API reachability
    HealthCheck,
    /// Generate a fresh BIP39 mnemonic
    GenerateMnemonic {
        /// 12 or 24 words
        #[arg(long, default_value = "24")]
        words: usize,
        /// Network the phrase is intended for
        #[arg(long)]
        network: Option<NetworkId>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args.config)?;
    let api = api::for_network(config.network);

    match args.command {
        Command::Address => {
            let wallet = wallet::global(&config)?;
            print_json(&get_my_address(wallet))?;
        }
        Command::Balance { address } => {
            let wallet = wallet::global(&config)?;
            let result = get_balance(GetBalanceParams { address }, wallet, &api).await?;
            print_json(&result)?;
        }
        Command::FeeEstimate => {
            print_json(&get_fee_estimate(&api).await?)?;
        }
        Command::Transaction { tx_id } => {
            print_json(&get_transaction(GetTransactionParams { tx_id }, &api).await?)?;
        }
        Command::HealthCheck => {
            print_json(&health_check(&config).await)?;
        }
        Command::GenerateMnemonic { words, network } => {
            let result = generate_mnemonic(GenerateMnemonicParams {
                word_count: Some(words),
                network,
            })?;
            print_json(&result)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "kaspactl=debug,info"
    } else {
        "kaspactl=info,warn,error"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Load configuration from file with fallback to defaults
fn load_config(path: &str) -> Result<Config> {
    if std::path::Path::new(path).exists() {
        Config::from_file_with_env(path)
            .with_context(|| format!("Failed to load config from {}", path))
    } else {
        warn!("Config file '{}' not found, using defaults", path);
        Ok(Config::default())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
