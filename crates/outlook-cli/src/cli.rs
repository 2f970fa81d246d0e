//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlook - See where your net worth is heading
#[derive(Parser)]
#[command(name = "outlook")]
#[command(about = "Scenario-based net worth forecasting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the data-dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project net worth under one scenario
    Forecast {
        /// Forecast input document (JSON: transactions, recurring, snapshot)
        #[arg(short, long)]
        input: PathBuf,

        /// Transaction history CSV, replacing the document's transactions
        #[arg(short, long)]
        transactions: Option<PathBuf>,

        /// Scenario: conservative, realistic, optimistic
        #[arg(short, long)]
        scenario: Option<String>,

        /// Horizon in months: 1, 3, 6, 12
        #[arg(long)]
        horizon: Option<u32>,

        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Output format: table, json, csv
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Project all three scenarios side by side
    Compare {
        /// Forecast input document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Transaction history CSV, replacing the document's transactions
        #[arg(short, long)]
        transactions: Option<PathBuf>,

        /// Horizon in months: 1, 3, 6, 12
        #[arg(long)]
        horizon: Option<u32>,

        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Output format: table, json
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show the historical statistics a forecast is built from
    Stats {
        /// Forecast input document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Transaction history CSV, replacing the document's transactions
        #[arg(short, long)]
        transactions: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Show the resolved configuration
    Config,

    /// Start the web server
    Serve {
        /// Port to listen on (defaults to config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config)
        #[arg(long)]
        host: Option<String>,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, the server requires a Bearer key from OUTLOOK_API_KEYS.
        #[arg(long)]
        no_auth: bool,
    },
}
