use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fixture_store::api::get_version;
use fixture_store::config::{log_config_fallback, StoreConfig, DEFAULT_CONFIG_PATH};
use fixture_store::logging::init_logging;
use fixture_store::FixtureStore;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "fixture_cli",
    version = get_version(),
    about = "Print the user and claim fixtures held by the store"
)]
struct Cli {
    /// Path to a JSON store configuration (defaults to assets/store_config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the user records as JSON
    Users {
        #[arg(long)]
        pretty: bool,
    },
    /// Print the claim document as JSON
    Claim {
        #[arg(long)]
        pretty: bool,
    },
    /// Print or write a snapshot of both slots
    Dump {
        #[arg(long)]
        pretty: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Load before logging is installed; report the fallback afterwards
    let (config, fallback) = match StoreConfig::try_load_from_file(&path) {
        Ok(config) => (config, None),
        Err(err) => (StoreConfig::default(), Some(err)),
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    init_logging(level);

    match &fallback {
        Some(err) => log_config_fallback(err),
        None => log::debug!("Using configuration from {}", path.display()),
    }

    let store = FixtureStore::with_config(&config);

    match cli.command {
        Commands::Users { pretty } => {
            let slot = store.users();
            log::debug!("Reading slot {}", slot.name());
            let users = slot.get()?;
            println!("{}", to_json(&users, pretty)?);
        }
        Commands::Claim { pretty } => {
            let slot = store.claim_document();
            log::debug!("Reading slot {}", slot.name());
            let claim = slot.get()?;
            println!("{}", to_json(&claim, pretty)?);
        }
        Commands::Dump { pretty, output } => {
            let snapshot = store.snapshot()?;
            let json = to_json(&snapshot, pretty)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("writing snapshot to {}", path.display()))?;
                    log::info!("Snapshot written to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(ExitCode::from(0))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
