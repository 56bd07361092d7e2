//! Scoring and benchmarking tests against hand-computed histories.

use techflow_core::{
    metrics::MetricsVector,
    scoring::{benchmarks, final_score, learning_insights, score_breakdown},
};

/// A constant synthetic history: every quarter identical.
fn flat_history(
    revenue: f64,
    profit: f64,
    share: f64,
    satisfaction: f64,
    cash: f64,
    productivity: f64,
) -> Vec<MetricsVector> {
    (1..=8)
        .map(|quarter| MetricsVector {
            quarter,
            revenue,
            gross_margin: 60.0,
            net_profit: profit,
            market_share: share,
            customer_satisfaction: satisfaction,
            cash_position: cash,
            employee_productivity: productivity,
            base_price: 100.0,
        })
        .collect()
}

#[test]
fn hand_computed_flat_run() {
    // profitability = 20/20*100 = 100, growth = 0 (flat revenue),
    // market = 35/35*100 = 100, loyalty = 80,
    // ops = 50 (cash > 15) + 90/2 = 95.
    let history = flat_history(60.0, 20.0, 35.0, 80.0, 20.0, 90.0);
    let b = score_breakdown(&history);

    assert_eq!(b.profitability, 100.0);
    assert_eq!(b.growth, 0.0);
    assert_eq!(b.market_position, 100.0);
    assert_eq!(b.customer_loyalty, 80.0);
    assert_eq!(b.operational_health, 95.0);

    // 30 + 0 + 20 + 12 + 14.25 = 76.25 -> 76
    assert_eq!(b.total, 76);
    assert_eq!(final_score(&history), 76);
}

#[test]
fn sub_scores_clamp_to_unit_range() {
    // Deeply negative profit and shrinking revenue: everything that
    // can bottom out does, and the total stays in [0, 100].
    let mut history = flat_history(100.0, -50.0, 5.0, 40.0, 5.0, 60.0);
    history[7].revenue = 10.0; // 90% revenue decline

    let b = score_breakdown(&history);
    assert_eq!(b.profitability, 0.0);
    assert_eq!(b.growth, 0.0);
    assert!(b.total <= 100);

    // And a runaway success caps at 100 everywhere.
    let mut history = flat_history(200.0, 500.0, 45.0, 100.0, 100.0, 100.0);
    history[0].revenue = 50.0; // 300% growth
    let b = score_breakdown(&history);
    assert_eq!(b.profitability, 100.0);
    assert_eq!(b.growth, 100.0);
    assert_eq!(b.market_position, 100.0);
    assert_eq!(b.total, 100);
}

#[test]
fn cash_threshold_flips_operational_component() {
    let rich = flat_history(60.0, 20.0, 30.0, 80.0, 16.0, 80.0);
    let tight = flat_history(60.0, 20.0, 30.0, 80.0, 15.0, 80.0);

    // 50 + 40 vs 25 + 40: the final-cash threshold is strictly > 15.
    assert_eq!(score_breakdown(&rich).operational_health, 90.0);
    assert_eq!(score_breakdown(&tight).operational_health, 65.0);
}

#[test]
fn benchmark_percentages_at_reference_values() {
    // Averages exactly at the fixed industry references: every
    // percentage caps at or near 100.
    let history = flat_history(60.0, 16.0, 25.0, 78.0, 20.0, 80.0);
    let report = benchmarks(&history);

    assert_eq!(report.revenue_percent, 100);
    assert_eq!(report.profit_percent, 100);
    assert_eq!(report.market_share_percent, 100);
    assert_eq!(report.satisfaction_percent, 100);
    assert_eq!(report.overall, 100);
    assert_eq!(report.growth, 50, "flat revenue centers the growth gauge");
}

#[test]
fn benchmark_strengths_and_improvements() {
    // Everything at reference level: all four are strengths.
    let strong = benchmarks(&flat_history(60.0, 16.0, 25.0, 78.0, 20.0, 80.0));
    assert_eq!(strong.strengths.len(), 4);
    assert!(strong.improvements.is_empty());

    // Weak across the board: revenue 50% of benchmark, profit 25%,
    // share 40%, satisfaction ~64% - all below their thresholds.
    let weak = benchmarks(&flat_history(30.0, 4.0, 10.0, 50.0, 10.0, 70.0));
    assert!(weak.strengths.is_empty());
    assert_eq!(weak.improvements.len(), 4);
    assert!(weak.overall < 70);
}

#[test]
fn satisfaction_uses_tighter_thresholds() {
    // satisfaction_percent = 94.9% of benchmark: short of the 95
    // strength bar but above the 85 improvement bar - neither list.
    let history = flat_history(60.0, 16.0, 25.0, 74.0, 20.0, 80.0);
    let report = benchmarks(&history);
    assert!((94..=95).contains(&report.satisfaction_percent));
    assert!(!report.strengths.iter().any(|s| s.metric == "Customer Loyalty"));
    assert!(!report
        .improvements
        .iter()
        .any(|s| s.metric == "Customer Satisfaction"));
}

#[test]
fn learning_insights_always_include_the_general_pair() {
    let insights = learning_insights(&flat_history(60.0, 15.0, 25.0, 75.0, 20.0, 80.0));
    assert!(insights
        .contains(&"Understanding trade-offs between growth and profitability is key to success"));
    assert!(insights
        .contains(&"Quality investments yield long-term benefits in customer retention"));
}

#[test]
fn learning_insights_flag_weak_cash() {
    let mut history = flat_history(60.0, 15.0, 25.0, 75.0, 20.0, 80.0);
    history[7].cash_position = 8.0;
    let insights = learning_insights(&history);
    assert!(insights
        .contains(&"Cash position became tight - maintain stronger financial reserves"));
}
