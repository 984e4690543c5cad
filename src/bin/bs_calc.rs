//! bs-calc - interactive Black-Scholes call calculator
//!
//! Prompts for spot, strike, time to expiration, risk-free rate and
//! volatility, prints d1, d2 and the call price, and repeats on request.
//! Logs go to stderr and are controlled by `RUST_LOG` (default `warn`).

use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;

use bs_calculator::shell::{Session, MODEL_DESCRIPTION};
use bs_calculator::{default_configs, CalculatorConfig, CdfProvider};

/// Black-Scholes call option calculator
#[derive(Parser)]
#[command(name = "bs-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from the form preset (pre-filled defaults, input minimums)
    #[arg(long, conflicts_with = "config")]
    form: bool,

    /// Normal CDF provider: erf or statrs
    #[arg(long)]
    cdf: Option<String>,

    /// Print a description of the model and exit
    #[arg(long)]
    about: bool,

    /// Log pricing details at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.about {
        print!("{}", MODEL_DESCRIPTION);
        return Ok(());
    }

    let mut config: CalculatorConfig = match &cli.config {
        Some(path) => CalculatorConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None if cli.form => default_configs::form(),
        None => default_configs::console(),
    };

    if let Some(name) = &cli.cdf {
        config.cdf = CdfProvider::parse(name)
            .ok_or_else(|| anyhow!("unknown CDF provider {:?} (expected erf or statrs)", name))?;
    }

    info!(cdf = ?config.cdf, accept_blank = config.accept_blank, "starting calculator");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run()?;
    Ok(())
}
