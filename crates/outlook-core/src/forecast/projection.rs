//! Month-by-month projection from a balance-sheet snapshot

use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::models::BalanceSheetSnapshot;

use super::history::HistoricalStats;
use super::scenario::{Horizon, Scenario};
use super::types::{ForecastAssumptions, ForecastPoint, ForecastResult};

/// Confidence lost per projected month
const CONFIDENCE_DECAY_PER_MONTH: f64 = 0.05;
const CONFIDENCE_CEILING: f64 = 0.95;
const CONFIDENCE_FLOOR: f64 = 0.5;
/// Largest penalty historical volatility can add
const MAX_VOLATILITY_PENALTY: f64 = 0.2;
const VOLATILITY_SCALE: f64 = 1000.0;

/// Confidence for a point `month` months ahead
pub fn confidence_at(month: u32, volatility: f64) -> f64 {
    let volatility_penalty = (volatility / VOLATILITY_SCALE).min(MAX_VOLATILITY_PENALTY);
    (CONFIDENCE_CEILING - month as f64 * CONFIDENCE_DECAY_PER_MONTH - volatility_penalty)
        .max(CONFIDENCE_FLOOR)
}

/// Round to the nearest whole currency unit
fn round_currency(value: f64) -> f64 {
    value.round()
}

/// Walk forward `horizon` months from the snapshot.
///
/// Only net worth is extrapolated. Assets and liabilities are re-derived at
/// each point from the snapshot's leverage, which stays fixed.
pub fn generate(
    stats: &HistoricalStats,
    scenario: Scenario,
    horizon: Horizon,
    snapshot: &BalanceSheetSnapshot,
    as_of: NaiveDate,
) -> ForecastResult {
    let multipliers = scenario.multipliers();
    let monthly_income = stats.avg_monthly_income * multipliers.income;
    let monthly_expenses = stats.avg_monthly_expenses * multipliers.expenses;
    let net_cash_flow = monthly_income - monthly_expenses;
    let growth_factor = multipliers.monthly_growth_factor();
    let liability_ratio = snapshot.liability_ratio();

    let mut points = Vec::with_capacity(horizon.months() as usize + 1);

    let anchor_net_worth = round_currency(snapshot.net_worth);
    points.push(ForecastPoint {
        date: as_of,
        net_worth: anchor_net_worth,
        assets: round_currency(snapshot.total_assets),
        liabilities: round_currency(snapshot.total_liabilities),
        confidence: 1.0,
        confidence_upper: anchor_net_worth,
        confidence_lower: anchor_net_worth,
    });

    // Carried unrounded so rounding error does not compound
    let mut net_worth = snapshot.net_worth;

    for month in 1..=horizon.months() {
        // Cash flow lands before growth, so growth compounds on it too
        net_worth = (net_worth + net_cash_flow) * growth_factor;

        let leverage = 1.0 - liability_ratio;
        let assets = if leverage == 0.0 {
            net_worth
        } else {
            net_worth / leverage
        };
        let liabilities = assets - net_worth;

        let confidence = confidence_at(month, stats.volatility);
        // Spread is rounded on its own so the band stays exactly symmetric
        let spread = round_currency((1.0 - confidence) * net_worth.abs() * 0.5);
        let rounded_net_worth = round_currency(net_worth);

        points.push(ForecastPoint {
            date: month_after(as_of, month),
            net_worth: rounded_net_worth,
            assets: round_currency(assets),
            liabilities: round_currency(liabilities),
            confidence,
            confidence_upper: rounded_net_worth + spread,
            confidence_lower: rounded_net_worth - spread,
        });
    }

    debug!(
        scenario = scenario.as_str(),
        horizon = horizon.months(),
        net_cash_flow,
        final_net_worth = net_worth,
        "Projection complete"
    );

    ForecastResult {
        scenario,
        horizon,
        points,
        assumptions: ForecastAssumptions {
            avg_monthly_income: monthly_income,
            avg_monthly_expenses: monthly_expenses,
            recurring_income: stats.recurring_income,
            recurring_expenses: stats.recurring_expenses,
            growth_rate: multipliers.growth_rate,
        },
    }
}

fn month_after(as_of: NaiveDate, months: u32) -> NaiveDate {
    as_of
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
