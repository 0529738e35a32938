use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use cloudstate::cloud_storage::CloudStoragesState;
use cloudstate::config::Config;
use cloudstate::logging::init_tracing;
use cloudstate::replay::{replay_file, ReplayOptions};

#[derive(Parser, Debug)]
#[command(name = "cloudstate", version, about = "Fold cloud storage events into a state snapshot")]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter, overrides the config file (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines event log and print the resulting state
    Replay {
        file: PathBuf,
        /// Pretty-print the state
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,
        /// Print the state on a single line
        #[arg(long)]
        compact: bool,
        /// Skip lines that are not valid events
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print the initial state
    Defaults {
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let filter = cli.log_level.as_deref().unwrap_or(&config.logging.filter);
    init_tracing(filter);

    match cli.command {
        Command::Replay {
            file,
            pretty,
            compact,
            skip_invalid,
        } => {
            let options = ReplayOptions {
                skip_invalid: skip_invalid || config.replay.skip_invalid,
            };
            let outcome = replay_file(&file, options)?;
            if !outcome.skipped.is_empty() {
                tracing::warn!(lines = ?outcome.skipped, "Some events were skipped");
            }
            let pretty = pretty || (config.replay.pretty && !compact);
            print_json(&outcome.state, pretty)?;
        }
        Command::Defaults { compact } => {
            print_json(&CloudStoragesState::default(), !compact)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize state")?;
    println!("{json}");
    Ok(())
}
