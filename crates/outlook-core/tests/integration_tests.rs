//! Integration tests for outlook-core
//!
//! These tests exercise the full history → scenario → projection workflow
//! through the public API.

use chrono::NaiveDate;
use outlook_core::{
    compare_scenarios, compute, generate, parse_input, parse_transactions_csv,
    BalanceSheetSnapshot, Frequency, HistoricalStats, Horizon, RecurringCashFlow, Scenario,
    Transaction,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn as_of() -> NaiveDate {
    date(2024, 6, 30)
}

/// Three months of salary, rent and groceries with an uneven May
fn household_history() -> Vec<Transaction> {
    vec![
        Transaction::new(date(2024, 4, 1), 5000.0).income(),
        Transaction::new(date(2024, 4, 2), -1500.0).with_category("rent"),
        Transaction::new(date(2024, 4, 12), -420.0).with_category("groceries"),
        Transaction::new(date(2024, 5, 1), 5000.0).income(),
        Transaction::new(date(2024, 5, 2), -1500.0).with_category("rent"),
        Transaction::new(date(2024, 5, 14), -2300.0).with_category("car"),
        Transaction::new(date(2024, 5, 20), -380.0).with_category("groceries"),
        Transaction::new(date(2024, 6, 1), 5000.0).income(),
        Transaction::new(date(2024, 6, 2), -1500.0).with_category("rent"),
        Transaction::new(date(2024, 6, 15), -450.0).with_category("groceries"),
        // Transfer in from savings: not income, but still in the window
        Transaction::new(date(2024, 6, 20), 1000.0),
    ]
}

fn snapshot() -> BalanceSheetSnapshot {
    BalanceSheetSnapshot::new(25000.0, 40000.0, 15000.0)
}

// =============================================================================
// Contract properties
// =============================================================================

#[test]
fn test_deterministic_output() {
    let txs = household_history();
    let flows = vec![RecurringCashFlow::new("Rent", -1500.0, Frequency::Monthly)];

    let first = compute(
        &txs,
        &flows,
        &snapshot(),
        Scenario::Realistic,
        Horizon::TwelveMonths,
        as_of(),
    );
    let second = compute(
        &txs,
        &flows,
        &snapshot(),
        Scenario::Realistic,
        Horizon::TwelveMonths,
        as_of(),
    );

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_anchor_and_point_count_for_every_combination() {
    let txs = household_history();
    let snapshot = BalanceSheetSnapshot::new(25000.4, 40000.0, 15000.0);

    for scenario in Scenario::all() {
        for horizon in Horizon::all() {
            let result = compute(&txs, &[], &snapshot, *scenario, *horizon, as_of());

            assert_eq!(result.points.len(), horizon.months() as usize + 1);
            assert_eq!(result.points[0].net_worth, 25000.0);
            assert_eq!(result.points[0].confidence, 1.0);
            assert_eq!(result.scenario, *scenario);
            assert_eq!(result.horizon, *horizon);
        }
    }
}

#[test]
fn test_confidence_never_increases() {
    let result = compute(
        &household_history(),
        &[],
        &snapshot(),
        Scenario::Conservative,
        Horizon::TwelveMonths,
        as_of(),
    );

    for pair in result.points[1..].windows(2) {
        assert!(pair[1].confidence <= pair[0].confidence);
    }
    for point in &result.points[1..] {
        assert!(point.confidence >= 0.5);
        assert!(point.confidence <= 0.95);
    }
    assert_eq!(result.final_point().unwrap().confidence, 0.5);
}

#[test]
fn test_scenario_ordering_with_positive_cash_flow() {
    let results = compare_scenarios(
        &household_history(),
        &[],
        &snapshot(),
        Horizon::TwelveMonths,
        as_of(),
    );

    let finals: Vec<f64> = results
        .iter()
        .map(|r| r.final_point().unwrap().net_worth)
        .collect();

    // conservative <= realistic <= optimistic
    assert!(finals[0] <= finals[1]);
    assert!(finals[1] <= finals[2]);
}

#[test]
fn test_band_symmetry() {
    for scenario in Scenario::all() {
        let result = compute(
            &household_history(),
            &[],
            &snapshot(),
            *scenario,
            Horizon::TwelveMonths,
            as_of(),
        );

        for point in &result.points[1..] {
            assert_eq!(
                point.confidence_upper - point.net_worth,
                point.net_worth - point.confidence_lower
            );
        }
    }
}

#[test]
fn test_worked_realistic_example() {
    let stats = HistoricalStats::from_averages(5000.0, 4000.0);
    let result = generate(
        &stats,
        Scenario::Realistic,
        Horizon::OneMonth,
        &BalanceSheetSnapshot::new(10000.0, 15000.0, 5000.0),
        as_of(),
    );

    let month1 = &result.points[1];
    assert_eq!(month1.net_worth, 11009.0);
    assert!((month1.confidence - 0.90).abs() < 1e-12);
    // spread = 0.1 * 11009.17 * 0.5 = 550.46 -> 550
    assert_eq!(month1.confidence_upper, 11559.0);
    assert_eq!(month1.confidence_lower, 10459.0);
}

#[test]
fn test_unflagged_inflow_is_ignored_by_projection() {
    let base = vec![
        Transaction::new(date(2024, 6, 1), 3000.0).income(),
        Transaction::new(date(2024, 6, 2), -1000.0),
    ];
    let mut with_transfer = base.clone();
    with_transfer.push(Transaction::new(date(2024, 6, 3), 200.0));

    let a = compute(
        &base,
        &[],
        &snapshot(),
        Scenario::Realistic,
        Horizon::SixMonths,
        as_of(),
    );
    let b = compute(
        &with_transfer,
        &[],
        &snapshot(),
        Scenario::Realistic,
        Horizon::SixMonths,
        as_of(),
    );

    assert_eq!(a.assumptions, b.assumptions);
    assert_eq!(a.points, b.points);
}

#[test]
fn test_single_month_history_decays_by_month_only() {
    let txs = vec![
        Transaction::new(date(2024, 6, 1), 8000.0).income(),
        Transaction::new(date(2024, 6, 25), -7900.0),
    ];
    let result = compute(
        &txs,
        &[],
        &snapshot(),
        Scenario::Realistic,
        Horizon::SixMonths,
        as_of(),
    );

    for (month, point) in result.points.iter().enumerate().skip(1) {
        let expected = (0.95 - month as f64 * 0.05).max(0.5);
        assert!((point.confidence - expected).abs() < 1e-12);
    }
}

#[test]
fn test_recurring_flows_reported_not_projected() {
    let flows = vec![
        RecurringCashFlow::new("Salary", 5000.0, Frequency::Monthly),
        RecurringCashFlow::new("Gym", -40.0, Frequency::Unrecognized),
    ];

    let with_flows = compute(
        &household_history(),
        &flows,
        &snapshot(),
        Scenario::Realistic,
        Horizon::ThreeMonths,
        as_of(),
    );
    let without = compute(
        &household_history(),
        &[],
        &snapshot(),
        Scenario::Realistic,
        Horizon::ThreeMonths,
        as_of(),
    );

    assert_eq!(with_flows.assumptions.recurring_income, 5000.0);
    assert_eq!(with_flows.assumptions.recurring_expenses, 40.0);
    assert_eq!(with_flows.points, without.points);
}

#[test]
fn test_empty_inputs_produce_flat_forecast() {
    let result = compute(
        &[],
        &[],
        &BalanceSheetSnapshot::new(0.0, 0.0, 0.0),
        Scenario::Optimistic,
        Horizon::TwelveMonths,
        as_of(),
    );

    assert_eq!(result.points.len(), 13);
    for point in &result.points {
        assert_eq!(point.net_worth, 0.0);
        assert_eq!(point.band_width(), 0.0);
    }
}

// =============================================================================
// File formats
// =============================================================================

#[test]
fn test_json_document_to_forecast() {
    let doc = r#"{
        "as_of": "2024-06-30",
        "transactions": [
            {"date": "2024-05-01", "amount": 4200, "is_income": true},
            {"date": "2024-05-04", "amount": -2100, "category_id": "rent"},
            {"date": "2024-06-01", "amount": 4200, "is_income": true},
            {"date": "2024-06-04", "amount": -2100, "category_id": "rent"}
        ],
        "recurring": [
            {"name": "Rent", "amount": -2100, "frequency": "monthly", "next_date": "2024-07-04"},
            {"name": "Bonus", "amount": 6000, "frequency": "yearly"}
        ],
        "snapshot": {"net_worth": 12000, "total_assets": 20000, "total_liabilities": 8000}
    }"#;

    let input = parse_input(doc.as_bytes()).unwrap();
    let as_of = input.as_of_or(date(2000, 1, 1));
    let result = input.compute(Scenario::Realistic, Horizon::ThreeMonths, as_of);

    assert_eq!(result.points[0].date, as_of);
    assert_eq!(result.assumptions.recurring_income, 500.0);
    assert_eq!(result.assumptions.recurring_expenses, 2100.0);
    assert!(result.net_worth_change() > 0.0);
}

#[test]
fn test_csv_history_to_stats() {
    let csv = "date,amount,category_id,is_recurring,is_income\n\
               2024-06-01,3000,,,true\n\
               2024-06-02,-800,rent,true,\n\
               2024-06-03,-120,groceries,,\n\
               2024-06-04,150,,,\n";

    let txs = parse_transactions_csv(csv.as_bytes()).unwrap();
    let stats = outlook_core::analyze(&txs, &[], as_of());

    assert_eq!(stats.total_income, 3000.0);
    assert_eq!(stats.total_expenses, 920.0);
    assert_eq!(stats.category_spending.len(), 2);
    assert_eq!(stats.volatility, 0.0);
}
