//! Shared command utilities

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::debug;

use outlook_core::{
    load_input, load_transactions_csv, ForecastConfig, ForecastInput, Horizon, OutputFormat,
    Scenario,
};

/// Load configuration from an explicit path, or the default override/embedded config
pub fn load_config(path: Option<&Path>) -> Result<ForecastConfig> {
    let config = match path {
        Some(p) => ForecastConfig::load_from(p)
            .with_context(|| format!("Failed to load config from {}", p.display()))?,
        None => ForecastConfig::load().context("Failed to load config")?,
    };
    Ok(config)
}

/// Load a forecast input document, optionally replacing its transactions with a CSV
pub fn load_forecast_input(input: &Path, transactions: Option<&Path>) -> Result<ForecastInput> {
    let mut doc = load_input(input)
        .with_context(|| format!("Failed to read forecast input {}", input.display()))?;

    if let Some(csv_path) = transactions {
        doc.transactions = load_transactions_csv(csv_path)
            .with_context(|| format!("Failed to read transactions {}", csv_path.display()))?;
        debug!(
            count = doc.transactions.len(),
            "Using transactions from CSV"
        );
    }

    Ok(doc)
}

/// --as-of flag > document as_of > today
pub fn resolve_as_of(flag: Option<&str>, input: &ForecastInput) -> Result<NaiveDate> {
    match flag {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .context("Invalid --as-of date format (use YYYY-MM-DD)"),
        None => Ok(input.as_of_or(Local::now().date_naive())),
    }
}

pub fn resolve_scenario(flag: Option<&str>, config: &ForecastConfig) -> Result<Scenario> {
    match flag {
        Some(s) => Ok(s.parse::<Scenario>()?),
        None => Ok(config.default_scenario),
    }
}

pub fn resolve_horizon(flag: Option<u32>, config: &ForecastConfig) -> Result<Horizon> {
    match flag {
        Some(months) => Ok(Horizon::try_from(months)?),
        None => Ok(config.default_horizon),
    }
}

pub fn resolve_format(flag: Option<&str>, config: &ForecastConfig) -> Result<OutputFormat> {
    match flag {
        Some(s) => s.parse::<OutputFormat>().map_err(anyhow::Error::msg),
        None => Ok(config.output),
    }
}
