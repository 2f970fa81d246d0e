//! Forecast and scenario comparison commands

use std::fmt::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};
use outlook_core::{points_to_csv, result_to_json, ForecastConfig, ForecastResult, OutputFormat};

use super::{
    format_money, load_forecast_input, resolve_as_of, resolve_format, resolve_horizon,
    resolve_scenario,
};

pub fn cmd_forecast(
    config: &ForecastConfig,
    input: &Path,
    transactions: Option<&Path>,
    scenario: Option<&str>,
    horizon: Option<u32>,
    as_of: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    // Reject bad flags before touching the filesystem
    let scenario = resolve_scenario(scenario, config)?;
    let horizon = resolve_horizon(horizon, config)?;
    let format = resolve_format(format, config)?;

    let doc = load_forecast_input(input, transactions)?;
    let as_of = resolve_as_of(as_of, &doc)?;

    let result = doc.compute(scenario, horizon, as_of);

    match format {
        OutputFormat::Table => {
            let mut out = String::new();
            render_forecast_table(&mut out, &result)?;
            print!("{}", out);
        }
        OutputFormat::Json => println!("{}", result_to_json(&result)?),
        OutputFormat::Csv => print!("{}", points_to_csv(&result)?),
    }

    Ok(())
}

pub fn cmd_compare(
    config: &ForecastConfig,
    input: &Path,
    transactions: Option<&Path>,
    horizon: Option<u32>,
    as_of: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let horizon = resolve_horizon(horizon, config)?;
    let format = resolve_format(format, config)?;
    if format == OutputFormat::Csv {
        bail!("CSV output is not supported for compare. Use table or json.");
    }

    let doc = load_forecast_input(input, transactions)?;
    let as_of = resolve_as_of(as_of, &doc)?;

    let results = doc.compare_scenarios(horizon, as_of);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        _ => {
            let mut out = String::new();
            render_comparison_table(&mut out, &results)?;
            print!("{}", out);
        }
    }

    Ok(())
}

/// Month-by-month table for a single forecast
pub fn render_forecast_table(out: &mut impl Write, result: &ForecastResult) -> fmt::Result {
    let start = result.anchor().map(|p| p.date.to_string()).unwrap_or_default();

    writeln!(out)?;
    writeln!(out, "📈 Net Worth Forecast")?;
    writeln!(
        out,
        "   Scenario: {}   Horizon: {} months   As of: {}",
        result.scenario,
        result.horizon.months(),
        start
    )?;
    writeln!(
        out,
        "   ─────────────────────────────────────────────────────────────────────────────"
    )?;
    writeln!(
        out,
        "   {:>5} │ {:10} │ {:>12} │ {:>12} │ {:>12} │ {:>5} │ {}",
        "Month", "Date", "Net Worth", "Assets", "Liabilities", "Conf", "Range"
    )?;
    writeln!(
        out,
        "   ──────┼────────────┼──────────────┼──────────────┼──────────────┼───────┼──────────────────"
    )?;

    for (month, point) in result.points.iter().enumerate() {
        writeln!(
            out,
            "   {:>5} │ {:10} │ {:>12} │ {:>12} │ {:>12} │ {:>4.0}% │ {} – {}",
            month,
            point.date.to_string(),
            format_money(point.net_worth),
            format_money(point.assets),
            format_money(point.liabilities),
            point.confidence * 100.0,
            format_money(point.confidence_lower),
            format_money(point.confidence_upper)
        )?;
    }

    let a = &result.assumptions;
    writeln!(out)?;
    writeln!(out, "   Assumptions (scenario-adjusted):")?;
    writeln!(
        out,
        "     Monthly income:    {}",
        format_money(a.avg_monthly_income)
    )?;
    writeln!(
        out,
        "     Monthly expenses:  {}",
        format_money(a.avg_monthly_expenses)
    )?;
    writeln!(
        out,
        "     Recurring:         {} in / {} out",
        format_money(a.recurring_income),
        format_money(a.recurring_expenses)
    )?;
    writeln!(out, "     Annual growth:     {:+.1}%", a.growth_rate * 100.0)?;
    writeln!(out)?;
    writeln!(
        out,
        "   Change over horizon: {}",
        format_money(result.net_worth_change())
    )
}

/// One row per scenario, final month only
pub fn render_comparison_table(out: &mut impl Write, results: &[ForecastResult]) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "🔮 Scenario Comparison")?;
    if let Some(first) = results.first() {
        writeln!(out, "   Horizon: {} months", first.horizon.months())?;
    }
    writeln!(
        out,
        "   ─────────────────────────────────────────────────────────────────────────"
    )?;
    writeln!(
        out,
        "   {:12} │ {:>12} │ {:>12} │ {:>5} │ {}",
        "Scenario", "Net Worth", "Change", "Conf", "Range"
    )?;
    writeln!(
        out,
        "   ─────────────┼──────────────┼──────────────┼───────┼──────────────────"
    )?;

    for result in results {
        let Some(last) = result.final_point() else {
            continue;
        };
        writeln!(
            out,
            "   {:12} │ {:>12} │ {:>12} │ {:>4.0}% │ {} – {}",
            result.scenario.to_string(),
            format_money(last.net_worth),
            format_money(result.net_worth_change()),
            last.confidence * 100.0,
            format_money(last.confidence_lower),
            format_money(last.confidence_upper)
        )?;
    }

    Ok(())
}
