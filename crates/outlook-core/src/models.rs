//! Domain models for Outlook
//!
//! These are the read-only inputs handed to the forecast engine by its
//! collaborators (transaction history, confirmed recurring flows, and the
//! current balance sheet).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A historical ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Signed amount (positive = inflow, negative = outflow)
    pub amount: f64,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
    #[serde(default)]
    pub is_income: Option<bool>,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            category_id: None,
            is_recurring: None,
            is_income: None,
        }
    }

    /// Mark this transaction as income
    pub fn income(mut self) -> Self {
        self.is_income = Some(true);
        self
    }

    /// Attach a category id
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Counts towards income only when positive AND explicitly flagged.
    ///
    /// Note the asymmetry with [`Transaction::is_expense`]: an unflagged
    /// inflow (e.g. a transfer in) is not income, while the matching
    /// outflow is still an expense. Callers rely on this, keep it.
    pub fn is_income(&self) -> bool {
        self.amount > 0.0 && self.is_income == Some(true)
    }

    /// Counts towards expenses by sign alone
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Billing frequency of a recurring cash flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Any other value supplied by the recurring-flow provider
    #[serde(other)]
    Unrecognized,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Factor converting one occurrence into a monthly equivalent.
    ///
    /// Unrecognized frequencies are treated as already monthly. This hides
    /// bad upstream data instead of failing, so it is logged by the
    /// analyzer.
    pub fn monthly_factor(&self) -> f64 {
        match self {
            Self::Daily => 30.0,
            Self::Weekly => 4.33,
            Self::Monthly => 1.0,
            Self::Yearly => 1.0 / 12.0,
            Self::Unrecognized => 1.0,
        }
    }
}

impl From<&str> for Frequency {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" | "annual" | "annually" => Self::Yearly,
            _ => Self::Unrecognized,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A confirmed recurring inflow or obligation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringCashFlow {
    pub name: String,
    /// Signed amount per occurrence
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub next_date: Option<NaiveDate>,
}

impl RecurringCashFlow {
    pub fn new(name: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency,
            next_date: None,
        }
    }

    /// Amount normalized to one month
    pub fn monthly_amount(&self) -> f64 {
        self.amount * self.frequency.monthly_factor()
    }
}

/// Current balance sheet, the starting point of a projection.
///
/// Assets and liabilities need not reconcile with net worth exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetSnapshot {
    pub net_worth: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
}

impl BalanceSheetSnapshot {
    pub fn new(net_worth: f64, total_assets: f64, total_liabilities: f64) -> Self {
        Self {
            net_worth,
            total_assets,
            total_liabilities,
        }
    }

    /// Liabilities over assets, with zero assets treated as one
    pub fn liability_ratio(&self) -> f64 {
        let assets = if self.total_assets == 0.0 {
            1.0
        } else {
            self.total_assets
        };
        self.total_liabilities / assets
    }
}

/// Everything the engine needs besides scenario and horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastInput {
    /// Reference date; callers default it to today when absent
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub recurring: Vec<RecurringCashFlow>,
    pub snapshot: BalanceSheetSnapshot,
}
