//! Net worth forecast engine
//!
//! A forecast is a pure function of its inputs:
//!
//! - **History** ([`analyze`]) - trailing three-month window of transactions
//!   and confirmed recurring flows reduced to monthly statistics
//! - **Scenario** ([`Scenario::multipliers`]) - fixed income, expense and
//!   growth multipliers
//! - **Projection** ([`generate`]) - month-by-month walk from the
//!   balance-sheet snapshot with a heuristic confidence band
//!
//! ## Usage
//!
//! ```rust,ignore
//! use outlook_core::forecast::{compute, Horizon, Scenario};
//!
//! let result = compute(&txs, &recurring, &snapshot, Scenario::Realistic, Horizon::TwelveMonths, today);
//! println!("{}", result.final_point().unwrap().net_worth);
//! ```
//!
//! Nothing is cached between calls; concurrent requests simply call
//! [`compute`] independently.

pub mod history;
pub mod projection;
pub mod scenario;
pub mod types;

use chrono::NaiveDate;

use crate::models::{BalanceSheetSnapshot, ForecastInput, RecurringCashFlow, Transaction};

pub use history::{analyze, window_start, HistoricalStats};
pub use projection::{confidence_at, generate};
pub use scenario::{Horizon, Scenario, ScenarioMultipliers};
pub use types::{ForecastAssumptions, ForecastPoint, ForecastResult};

/// Analyze history and project one scenario
pub fn compute(
    transactions: &[Transaction],
    recurring_flows: &[RecurringCashFlow],
    snapshot: &BalanceSheetSnapshot,
    scenario: Scenario,
    horizon: Horizon,
    as_of: NaiveDate,
) -> ForecastResult {
    let stats = analyze(transactions, recurring_flows, as_of);
    generate(&stats, scenario, horizon, snapshot, as_of)
}

/// Analyze history once and project every scenario, most pessimistic first
pub fn compare_scenarios(
    transactions: &[Transaction],
    recurring_flows: &[RecurringCashFlow],
    snapshot: &BalanceSheetSnapshot,
    horizon: Horizon,
    as_of: NaiveDate,
) -> Vec<ForecastResult> {
    let stats = analyze(transactions, recurring_flows, as_of);
    Scenario::all()
        .iter()
        .map(|scenario| generate(&stats, *scenario, horizon, snapshot, as_of))
        .collect()
}

impl ForecastInput {
    /// Reference date, falling back to the given default
    pub fn as_of_or(&self, default: NaiveDate) -> NaiveDate {
        self.as_of.unwrap_or(default)
    }

    pub fn analyze(&self, as_of: NaiveDate) -> HistoricalStats {
        analyze(&self.transactions, &self.recurring, as_of)
    }

    pub fn compute(&self, scenario: Scenario, horizon: Horizon, as_of: NaiveDate) -> ForecastResult {
        compute(
            &self.transactions,
            &self.recurring,
            &self.snapshot,
            scenario,
            horizon,
            as_of,
        )
    }

    pub fn compare_scenarios(&self, horizon: Horizon, as_of: NaiveDate) -> Vec<ForecastResult> {
        compare_scenarios(
            &self.transactions,
            &self.recurring,
            &self.snapshot,
            horizon,
            as_of,
        )
    }
}
