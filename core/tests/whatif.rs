//! Scenario projection tests: the linear sensitivity arithmetic and
//! the insight thresholds.

use techflow_core::{scenario::project, DecisionInput};

fn base() -> DecisionInput {
    DecisionInput::default() // {50, 50, 100, 50}
}

#[test]
fn marketing_push_arithmetic() {
    let hyp = DecisionInput {
        marketing: 80.0, // delta +0.3
        ..base()
    };
    let impact = project(&base(), &hyp);

    // revenue = 0.3 * 15 = 4.5
    assert!((impact.revenue_change_pct - 4.5).abs() < 1e-9);
    // profit = 4.5 * 0.5 - 0.3 * 20 = -3.75
    assert!((impact.profit_change_pct - (-3.75)).abs() < 1e-9);
    // share = 0.3 * 20 = 6
    assert!((impact.market_share_change_pct - 6.0).abs() < 1e-9);
    assert_eq!(impact.satisfaction_change_pts, 0.0);

    assert_eq!(impact.insights.len(), 1);
    assert!(impact.insights[0].contains("Increasing marketing by 30%"));
    assert!(impact.insights[0].contains("boost revenue by ~4.5%"));
}

#[test]
fn combined_levers_arithmetic() {
    let hyp = DecisionInput {
        marketing: 70.0,  // +0.2
        quality: 80.0,    // +0.3
        pricing: 110.0,   // +0.1
        efficiency: 60.0, // +0.1
    };
    let impact = project(&base(), &hyp);

    // revenue = 0.2*15 - 0.1*10 + 0.1*5 = 2.5
    assert!((impact.revenue_change_pct - 2.5).abs() < 1e-9);
    // profit = 1.25 - 4 - 4.5 + 1 = -6.25
    assert!((impact.profit_change_pct - (-6.25)).abs() < 1e-9);
    // share = 4 - 1.5 = 2.5
    assert!((impact.market_share_change_pct - 2.5).abs() < 1e-9);
    // satisfaction = 4.5 - 0.5 + 0.3 = 4.3
    assert!((impact.satisfaction_change_pts - 4.3).abs() < 1e-9);
}

#[test]
fn insight_thresholds() {
    // Marketing delta exactly at the 0.2 threshold: no insight
    // (strictly greater-than).
    let at_threshold = DecisionInput {
        marketing: 70.0,
        ..base()
    };
    let impact = project(&base(), &at_threshold);
    assert_eq!(impact.insights, vec!["Adjust sliders to see estimated impacts"]);

    // Pricing moves on a much tighter threshold (0.05).
    let price_cut = DecisionInput {
        pricing: 94.0, // delta -0.06
        ..base()
    };
    let impact = project(&base(), &price_cut);
    assert_eq!(impact.insights.len(), 1);
    assert!(impact.insights[0].contains("Lowering prices by 6%"));
    assert!(impact.insights[0].contains("market share by 0.9%"));

    // Quality beyond 0.2 adds the satisfaction line.
    let quality_cut = DecisionInput {
        quality: 20.0, // delta -0.3
        ..base()
    };
    let impact = project(&base(), &quality_cut);
    assert_eq!(impact.insights.len(), 1);
    assert!(impact.insights[0].contains("Decreasing quality investment"));
    assert!(impact.insights[0].contains("-5 points") || impact.insights[0].contains("-4 points"));
}

#[test]
fn identical_decisions_project_zero() {
    let impact = project(&base(), &base());
    assert_eq!(impact.revenue_change_pct, 0.0);
    assert_eq!(impact.profit_change_pct, 0.0);
    assert_eq!(impact.market_share_change_pct, 0.0);
    assert_eq!(impact.satisfaction_change_pts, 0.0);
    assert_eq!(impact.insights, vec!["Adjust sliders to see estimated impacts"]);
}
