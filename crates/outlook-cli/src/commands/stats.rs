//! Historical statistics command

use std::fmt::{self, Write};
use std::path::Path;

use anyhow::Result;
use outlook_core::HistoricalStats;

use super::{format_money, load_forecast_input, resolve_as_of};

/// Categories shown in the spending breakdown
const TOP_CATEGORIES: usize = 10;

pub fn cmd_stats(input: &Path, transactions: Option<&Path>, as_of: Option<&str>) -> Result<()> {
    let doc = load_forecast_input(input, transactions)?;
    let as_of = resolve_as_of(as_of, &doc)?;

    let stats = doc.analyze(as_of);
    let mut out = String::new();
    render_stats(&mut out, &stats)?;
    print!("{}", out);

    Ok(())
}

pub fn render_stats(out: &mut impl Write, stats: &HistoricalStats) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "📊 Historical Statistics")?;
    writeln!(
        out,
        "   Window starts: {}   Months: {:.2}",
        stats.window_start, stats.months_in_period
    )?;
    writeln!(out, "   ─────────────────────────────────────────────")?;
    writeln!(
        out,
        "   Transactions analyzed: {}",
        stats.transactions_analyzed
    )?;
    writeln!(
        out,
        "   Income:   {} total, {}/mo",
        format_money(stats.total_income),
        format_money(stats.avg_monthly_income)
    )?;
    writeln!(
        out,
        "   Expenses: {} total, {}/mo",
        format_money(stats.total_expenses),
        format_money(stats.avg_monthly_expenses)
    )?;
    writeln!(
        out,
        "   Recurring: {} in / {} out per month",
        format_money(stats.recurring_income),
        format_money(stats.recurring_expenses)
    )?;
    writeln!(
        out,
        "   Volatility (monthly net std dev): {}",
        format_money(stats.volatility)
    )?;

    if stats.category_spending.is_empty() {
        return Ok(());
    }

    let mut categories: Vec<(&String, &f64)> = stats.category_spending.iter().collect();
    categories.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));

    writeln!(out)?;
    writeln!(out, "   {:25} │ {:>12}", "Category", "Spent")?;
    writeln!(out, "   ──────────────────────────┼─────────────")?;
    for (category, amount) in categories.iter().take(TOP_CATEGORIES) {
        writeln!(out, "   {:25} │ {:>12}", category, format_money(**amount))?;
    }
    if categories.len() > TOP_CATEGORIES {
        writeln!(
            out,
            "   ... and {} more",
            categories.len() - TOP_CATEGORIES
        )?;
    }

    Ok(())
}
