//! Command-line interface for report-format
//!
//! Provides `market`, `compare`, `factors` and `price` subcommands over a
//! report service JSON response read from a file or stdin.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;
use crate::report::ReportFormatter;

mod compare;
mod market;
mod utils;

/// Turn free-text vehicle reports into structured sections
#[derive(Parser)]
#[command(name = "report-format")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (report-format.toml or report-format.yml)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a market-analysis response (sections, factors, price)
    Market(market::MarketArgs),

    /// Format a car-comparison response
    Compare(compare::CompareArgs),

    /// Show only the pricing factors of a market-analysis response
    Factors(market::MarketArgs),

    /// Show only the resolved price range of a market-analysis response
    Price(market::MarketArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = load_config(&std::env::current_dir()?, cli.config.as_deref())?;
    let formatter = ReportFormatter::new(config);

    match cli.command {
        Commands::Market(args) => market::run(&formatter, args, market::View::Full),
        Commands::Factors(args) => market::run(&formatter, args, market::View::Factors),
        Commands::Price(args) => market::run(&formatter, args, market::View::Price),
        Commands::Compare(args) => compare::run(&formatter, args),
    }
}
