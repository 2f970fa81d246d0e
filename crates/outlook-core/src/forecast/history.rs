//! Historical analysis
//!
//! Reduces a trailing window of transactions plus the confirmed recurring
//! flows into the monthly statistics the projection is driven by.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Frequency, RecurringCashFlow, Transaction};

/// Length of the trailing analysis window
pub const ANALYSIS_WINDOW_MONTHS: u32 = 3;

/// Mean days per calendar month
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Per-month statistics derived from history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalStats {
    /// First day included in the analysis window
    pub window_start: NaiveDate,
    /// Transactions that fell inside the window
    pub transactions_analyzed: usize,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Months spanned by the windowed data, never below 1
    pub months_in_period: f64,
    pub avg_monthly_income: f64,
    pub avg_monthly_expenses: f64,
    pub recurring_income: f64,
    pub recurring_expenses: f64,
    /// Expense totals by category id. Not consumed by the projection.
    pub category_spending: BTreeMap<String, f64>,
    /// Population std dev of monthly net flow
    pub volatility: f64,
}

impl HistoricalStats {
    /// Stats with the given averages and nothing else, for driving a
    /// projection directly
    pub fn from_averages(avg_monthly_income: f64, avg_monthly_expenses: f64) -> Self {
        Self {
            window_start: NaiveDate::MIN,
            transactions_analyzed: 0,
            total_income: 0.0,
            total_expenses: 0.0,
            months_in_period: 1.0,
            avg_monthly_income,
            avg_monthly_expenses,
            recurring_income: 0.0,
            recurring_expenses: 0.0,
            category_spending: BTreeMap::new(),
            volatility: 0.0,
        }
    }

    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }
}

/// First date of the trailing window ending at `as_of`
pub fn window_start(as_of: NaiveDate) -> NaiveDate {
    as_of
        .checked_sub_months(Months::new(ANALYSIS_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Analyze transaction history and recurring flows as of a reference date
pub fn analyze(
    transactions: &[Transaction],
    recurring_flows: &[RecurringCashFlow],
    as_of: NaiveDate,
) -> HistoricalStats {
    let start = window_start(as_of);

    let window: Vec<&Transaction> = transactions.iter().filter(|t| t.date >= start).collect();

    let total_income: f64 = window
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expenses: f64 = window
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount.abs())
        .sum();

    let earliest = window.iter().map(|t| t.date).min().unwrap_or(start);
    let months_in_period = months_spanned(earliest, as_of);

    let (recurring_income, recurring_expenses) = recurring_totals(recurring_flows);

    let mut category_spending: BTreeMap<String, f64> = BTreeMap::new();
    for tx in window.iter().filter(|t| t.is_expense()) {
        if let Some(ref category) = tx.category_id {
            *category_spending.entry(category.clone()).or_insert(0.0) += tx.amount.abs();
        }
    }

    let volatility = monthly_volatility(&window);

    let stats = HistoricalStats {
        window_start: start,
        transactions_analyzed: window.len(),
        total_income,
        total_expenses,
        months_in_period,
        avg_monthly_income: total_income / months_in_period,
        avg_monthly_expenses: total_expenses / months_in_period,
        recurring_income,
        recurring_expenses,
        category_spending,
        volatility,
    };

    debug!(
        %as_of,
        transactions = stats.transactions_analyzed,
        months = stats.months_in_period,
        avg_income = stats.avg_monthly_income,
        avg_expenses = stats.avg_monthly_expenses,
        volatility = stats.volatility,
        "Historical analysis complete"
    );

    stats
}

/// Months between two dates at 30.44 days per month, floored at 1
fn months_spanned(earliest: NaiveDate, as_of: NaiveDate) -> f64 {
    let day_span = (as_of - earliest).num_days() as f64;
    (day_span / DAYS_PER_MONTH).max(1.0)
}

/// Sum recurring flows into (monthly income, monthly expenses)
fn recurring_totals(flows: &[RecurringCashFlow]) -> (f64, f64) {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for flow in flows {
        if flow.frequency == Frequency::Unrecognized {
            // Counted as monthly rather than rejected; the data is suspect
            warn!(
                name = %flow.name,
                amount = flow.amount,
                "Unrecognized recurring frequency, treating as monthly"
            );
        }

        let monthly = flow.monthly_amount();
        if monthly > 0.0 {
            income += monthly;
        } else if monthly < 0.0 {
            expenses += monthly.abs();
        }
    }

    (income, expenses)
}

/// Population standard deviation of signed net flow per calendar month.
/// Zero with fewer than two distinct months.
fn monthly_volatility(window: &[&Transaction]) -> f64 {
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for tx in window {
        *by_month
            .entry((tx.date.year(), tx.date.month()))
            .or_insert(0.0) += tx.amount;
    }

    if by_month.len() < 2 {
        return 0.0;
    }

    let n = by_month.len() as f64;
    let mean = by_month.values().sum::<f64>() / n;
    let variance = by_month
        .values()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn as_of() -> NaiveDate {
        date(2024, 6, 30)
    }

    #[test]
    fn test_window_start_is_three_calendar_months() {
        assert_eq!(window_start(date(2024, 6, 30)), date(2024, 3, 30));
        // Clamped to the end of a shorter month
        assert_eq!(window_start(date(2024, 5, 31)), date(2024, 2, 29));
    }

    #[test]
    fn test_empty_history() {
        let stats = analyze(&[], &[], as_of());

        assert_eq!(stats.total_income, 0.0);
        assert_eq!(stats.total_expenses, 0.0);
        assert_eq!(stats.avg_monthly_income, 0.0);
        assert_eq!(stats.avg_monthly_expenses, 0.0);
        assert_eq!(stats.volatility, 0.0);
        assert!(stats.category_spending.is_empty());
        // Defaults to the full window: 92 days / 30.44
        assert!((stats.months_in_period - 92.0 / DAYS_PER_MONTH).abs() < 1e-9);
    }

    #[test]
    fn test_transactions_before_window_ignored() {
        let txs = vec![
            Transaction::new(date(2024, 1, 15), 9000.0).income(),
            Transaction::new(date(2024, 2, 1), -700.0),
        ];
        let stats = analyze(&txs, &[], as_of());

        assert_eq!(stats.transactions_analyzed, 0);
        assert_eq!(stats.total_income, 0.0);
        assert_eq!(stats.total_expenses, 0.0);
    }

    #[test]
    fn test_window_start_day_is_inclusive() {
        let on_start = vec![Transaction::new(date(2024, 3, 30), -300.0)];
        let stats = analyze(&on_start, &[], as_of());
        assert_eq!(stats.transactions_analyzed, 1);
        assert_eq!(stats.total_expenses, 300.0);

        let day_before = vec![Transaction::new(date(2024, 3, 29), -300.0)];
        let stats = analyze(&day_before, &[], as_of());
        assert_eq!(stats.transactions_analyzed, 0);
        assert_eq!(stats.total_expenses, 0.0);
    }

    #[test]
    fn test_unflagged_inflow_excluded() {
        let txs = vec![
            Transaction::new(date(2024, 6, 1), 200.0),
            Transaction::new(date(2024, 6, 2), -200.0),
        ];
        let stats = analyze(&txs, &[], as_of());

        assert_eq!(stats.total_income, 0.0);
        assert_eq!(stats.total_expenses, 200.0);
        assert_eq!(stats.transactions_analyzed, 2);
    }

    #[test]
    fn test_sparse_data_floors_months_at_one() {
        let txs = vec![
            Transaction::new(date(2024, 6, 20), 3000.0).income(),
            Transaction::new(date(2024, 6, 25), -1000.0),
        ];
        let stats = analyze(&txs, &[], as_of());

        assert_eq!(stats.months_in_period, 1.0);
        assert_eq!(stats.avg_monthly_income, 3000.0);
        assert_eq!(stats.avg_monthly_expenses, 1000.0);
    }

    #[test]
    fn test_averages_over_spanned_months() {
        let txs = vec![
            Transaction::new(date(2024, 4, 1), 5000.0).income(),
            Transaction::new(date(2024, 5, 1), 5000.0).income(),
            Transaction::new(date(2024, 6, 1), 5000.0).income(),
            Transaction::new(date(2024, 4, 10), -3000.0),
        ];
        let stats = analyze(&txs, &[], as_of());

        let months = 90.0 / DAYS_PER_MONTH;
        assert!((stats.months_in_period - months).abs() < 1e-9);
        assert!((stats.avg_monthly_income - 15000.0 / months).abs() < 1e-9);
        assert!((stats.avg_monthly_expenses - 3000.0 / months).abs() < 1e-9);
    }

    #[test]
    fn test_recurring_normalization() {
        let flows = vec![
            RecurringCashFlow::new("Salary", 4000.0, Frequency::Monthly),
            RecurringCashFlow::new("Rent", -1500.0, Frequency::Monthly),
            RecurringCashFlow::new("Insurance", -600.0, Frequency::Yearly),
            RecurringCashFlow::new("Lunch", -10.0, Frequency::Weekly),
            RecurringCashFlow::new("Mystery", -25.0, Frequency::Unrecognized),
        ];
        let stats = analyze(&[], &flows, as_of());

        assert_eq!(stats.recurring_income, 4000.0);
        let expected = 1500.0 + 50.0 + 43.3 + 25.0;
        assert!((stats.recurring_expenses - expected).abs() < 1e-9);
    }

    #[test]
    fn test_category_spending() {
        let txs = vec![
            Transaction::new(date(2024, 6, 1), -50.0).with_category("groceries"),
            Transaction::new(date(2024, 6, 8), -70.0).with_category("groceries"),
            Transaction::new(date(2024, 6, 9), -30.0).with_category("dining"),
            Transaction::new(date(2024, 6, 10), -99.0),
            // Inflows never count towards category spending
            Transaction::new(date(2024, 6, 11), 20.0).with_category("groceries"),
        ];
        let stats = analyze(&txs, &[], as_of());

        assert_eq!(stats.category_spending.len(), 2);
        assert_eq!(stats.category_spending["groceries"], 120.0);
        assert_eq!(stats.category_spending["dining"], 30.0);
    }

    #[test]
    fn test_volatility_single_month_is_zero() {
        let txs = vec![
            Transaction::new(date(2024, 6, 1), 5000.0).income(),
            Transaction::new(date(2024, 6, 15), -4500.0),
        ];
        let stats = analyze(&txs, &[], as_of());
        assert_eq!(stats.volatility, 0.0);
    }

    #[test]
    fn test_volatility_uses_signed_monthly_net() {
        // April net = +1000, May net = -1000 -> mean 0, population sd 1000
        let txs = vec![
            Transaction::new(date(2024, 4, 5), 3000.0).income(),
            Transaction::new(date(2024, 4, 20), -2000.0),
            Transaction::new(date(2024, 5, 5), 1000.0),
            Transaction::new(date(2024, 5, 20), -2000.0),
        ];
        let stats = analyze(&txs, &[], as_of());
        assert!((stats.volatility - 1000.0).abs() < 1e-9);
    }
}
