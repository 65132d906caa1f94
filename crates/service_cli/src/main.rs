//! bsm-pricer - Command Line Black-Scholes-Merton Pricer
//!
//! Operational entry point for the pricer_bsm engine.
//!
//! # Commands
//!
//! - `bsm-pricer price --type call --spot 100 --strike 100 --rate 0.05 --sigma 0.2 --expiry 1`
//!   prices a European option; add `--show-greeks` for Delta, Gamma, Theta, Vega and Rho
//! - `bsm-pricer check` - verify configuration and run the engine self-check
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns input validation,
//! configuration and presentation. The engine only sees validated inputs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::price::PriceArgs;
use config::CliConfig;
pub use error::{CliError, Result};

/// Black-Scholes-Merton European option pricer with Greeks
#[derive(Parser, Debug)]
#[command(name = "bsm-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML) [default: bsm-pricer.toml if present]
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a European option
    Price(PriceArgs),

    /// Check configuration and run the pricing self-check
    Check,
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let (config, source) = CliConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(source = ?source, "Configuration loaded");

    match cli.command {
        Commands::Price(args) => commands::price::run(&args, &config),
        Commands::Check => commands::check::run(&config, source.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
