//! Output types for the forecast engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::scenario::{Horizon, Scenario};

/// One projected month (or the present, at index 0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub net_worth: f64,
    pub assets: f64,
    pub liabilities: f64,
    /// Heuristic certainty in [0.5, 0.95], or 1.0 for the anchor.
    /// Not a statistical confidence level.
    pub confidence: f64,
    pub confidence_upper: f64,
    pub confidence_lower: f64,
}

impl ForecastPoint {
    /// Width of the band around net worth
    pub fn band_width(&self) -> f64 {
        self.confidence_upper - self.confidence_lower
    }
}

/// Scenario-adjusted inputs the projection ran with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastAssumptions {
    pub avg_monthly_income: f64,
    pub avg_monthly_expenses: f64,
    pub recurring_income: f64,
    pub recurring_expenses: f64,
    /// Annual rate; applied monthly as `1 + growth_rate / 12`
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub scenario: Scenario,
    pub horizon: Horizon,
    /// Index 0 is the present; one entry per projected month follows
    pub points: Vec<ForecastPoint>,
    pub assumptions: ForecastAssumptions,
}

impl ForecastResult {
    pub fn anchor(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    /// Point at the end of the horizon
    pub fn final_point(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }

    /// Projected change in net worth over the horizon
    pub fn net_worth_change(&self) -> f64 {
        match (self.anchor(), self.final_point()) {
            (Some(first), Some(last)) => last.net_worth - first.net_worth,
            _ => 0.0,
        }
    }
}
