//! Outlook Core Library
//!
//! Net worth forecasting for the Outlook personal finance tool:
//! - Historical analysis of a trailing transaction window
//! - Scenario multipliers (conservative, realistic, optimistic)
//! - Month-by-month projection with a heuristic confidence band
//! - Forecast configuration with file overrides
//! - JSON/CSV loading of inputs and export of results

pub mod config;
pub mod error;
pub mod export;
pub mod forecast;
pub mod import;
pub mod models;

pub use config::{ForecastConfig, OutputFormat, ServerSettings};
pub use error::{Error, Result};
pub use export::{points_to_csv, result_to_json};
pub use forecast::{
    analyze, compare_scenarios, compute, generate, ForecastAssumptions, ForecastPoint,
    ForecastResult, HistoricalStats, Horizon, Scenario, ScenarioMultipliers,
};
pub use import::{load_input, load_transactions_csv, parse_input, parse_transactions_csv};
pub use models::{BalanceSheetSnapshot, ForecastInput, Frequency, RecurringCashFlow, Transaction};
