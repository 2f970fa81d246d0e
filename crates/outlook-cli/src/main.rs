//! Outlook CLI - Net worth forecasting
//!
//! Usage:
//!   outlook forecast --input data.json          Project the default scenario
//!   outlook compare --input data.json           Compare all three scenarios
//!   outlook stats --input data.json             Show historical statistics
//!   outlook serve --port 3000                   Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Forecast {
            input,
            transactions,
            scenario,
            horizon,
            as_of,
            format,
        } => commands::cmd_forecast(
            &config,
            &input,
            transactions.as_deref(),
            scenario.as_deref(),
            horizon,
            as_of.as_deref(),
            format.as_deref(),
        ),
        Commands::Compare {
            input,
            transactions,
            horizon,
            as_of,
            format,
        } => commands::cmd_compare(
            &config,
            &input,
            transactions.as_deref(),
            horizon,
            as_of.as_deref(),
            format.as_deref(),
        ),
        Commands::Stats {
            input,
            transactions,
            as_of,
        } => commands::cmd_stats(&input, transactions.as_deref(), as_of.as_deref()),
        Commands::Config => commands::cmd_config(&config, cli.config.as_deref()),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => commands::cmd_serve(config, host.as_deref(), port, no_auth).await,
    }
}
