//! Forecast handlers
//!
//! Every request carries its full input; nothing is stored between calls.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use crate::{AppError, AppState};
use outlook_core::{ForecastInput, ForecastResult, HistoricalStats, Horizon, Scenario};

/// Body for POST /api/forecast
#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    #[serde(flatten)]
    pub input: ForecastInput,
    /// conservative | realistic | optimistic (defaults from config)
    pub scenario: Option<String>,
    /// 1, 3, 6 or 12 (defaults from config)
    pub horizon: Option<u32>,
}

/// Body for POST /api/forecast/compare
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(flatten)]
    pub input: ForecastInput,
    pub horizon: Option<u32>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_horizon(state: &AppState, horizon: Option<u32>) -> Result<Horizon, AppError> {
    Ok(horizon
        .map(Horizon::try_from)
        .transpose()?
        .unwrap_or(state.forecast.default_horizon))
}

fn resolve_scenario(state: &AppState, scenario: Option<&str>) -> Result<Scenario, AppError> {
    Ok(scenario
        .map(str::parse::<Scenario>)
        .transpose()?
        .unwrap_or(state.forecast.default_scenario))
}

/// POST /api/forecast - Project one scenario
pub async fn create_forecast(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResult>, AppError> {
    let scenario = resolve_scenario(&state, req.scenario.as_deref())?;
    let horizon = resolve_horizon(&state, req.horizon)?;
    let as_of = req.input.as_of_or(today());

    debug!(
        %scenario,
        %horizon,
        %as_of,
        transactions = req.input.transactions.len(),
        "Forecast request"
    );

    Ok(Json(req.input.compute(scenario, horizon, as_of)))
}

/// POST /api/forecast/compare - Project all three scenarios
pub async fn compare_forecasts(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<Vec<ForecastResult>>, AppError> {
    let horizon = resolve_horizon(&state, req.horizon)?;
    let as_of = req.input.as_of_or(today());

    debug!(%horizon, %as_of, "Scenario comparison request");

    Ok(Json(req.input.compare_scenarios(horizon, as_of)))
}

/// POST /api/forecast/stats - Historical statistics behind a forecast
pub async fn forecast_stats(Json(input): Json<ForecastInput>) -> Json<HistoricalStats> {
    let as_of = input.as_of_or(today());
    Json(input.analyze(as_of))
}
