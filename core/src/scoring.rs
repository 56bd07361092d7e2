//! Final scoring and industry benchmarking over a completed run.
//!
//! The composite score weighs five sub-scores, each clamped to
//! [0, 100] before weighting:
//!   profitability 30%, growth 20%, market position 20%,
//!   customer loyalty 15%, operational health 15%.
//!
//! Benchmarks compare run averages against fixed reference values -
//! assumed industry standards, used only for relative comparison.

use crate::metrics::MetricsVector;
use serde::{Deserialize, Serialize};

// Assumed industry averages.
const REVENUE_BENCHMARK: f64 = 60.0;
const PROFIT_BENCHMARK: f64 = 16.0;
const MARKET_SHARE_BENCHMARK: f64 = 25.0;
const SATISFACTION_BENCHMARK: f64 = 78.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub profitability: f64,
    pub growth: f64,
    pub market_position: f64,
    pub customer_loyalty: f64,
    pub operational_health: f64,
    /// Weighted sum, rounded. Always in [0, 100].
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkNote {
    pub metric: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    /// Unweighted mean of the four percentages, rounded. In [0, 100].
    pub overall: u32,
    pub revenue_percent: u32,
    pub profit_percent: u32,
    pub market_share_percent: u32,
    pub satisfaction_percent: u32,
    /// Growth indicator centered at 50 (no growth), clamped [0, 100].
    pub growth: u32,
    pub strengths: Vec<BenchmarkNote>,
    pub improvements: Vec<BenchmarkNote>,
}

fn avg(history: &[MetricsVector], f: impl Fn(&MetricsVector) -> f64) -> f64 {
    history.iter().map(f).sum::<f64>() / history.len() as f64
}

/// Sub-scores and composite for a completed run.
/// `history` is the completed-quarters slice (quarter 0 excluded).
pub fn score_breakdown(history: &[MetricsVector]) -> ScoreBreakdown {
    assert!(!history.is_empty(), "scoring over empty history");

    let first = &history[0];
    let last = &history[history.len() - 1];

    let avg_profit = avg(history, |m| m.net_profit);
    let profitability = (avg_profit / 20.0 * 100.0).clamp(0.0, 100.0);

    let revenue_growth = (last.revenue - first.revenue) / first.revenue * 100.0;
    let growth = (revenue_growth * 2.0).clamp(0.0, 100.0);

    let market_position = (avg(history, |m| m.market_share) / 35.0 * 100.0).clamp(0.0, 100.0);

    // Satisfaction is already on a 0-100 scale; the clamp is a no-op
    // for any in-bounds history but keeps the contract uniform.
    let customer_loyalty = avg(history, |m| m.customer_satisfaction).clamp(0.0, 100.0);

    let cash_component = if last.cash_position > 15.0 { 50.0 } else { 25.0 };
    let operational_health =
        (cash_component + avg(history, |m| m.employee_productivity) / 2.0).clamp(0.0, 100.0);

    let total = (profitability * 0.30
        + growth * 0.20
        + market_position * 0.20
        + customer_loyalty * 0.15
        + operational_health * 0.15)
        .round() as u32;

    log::info!(
        "final score {total}/100 (profit {profitability:.0}, growth {growth:.0}, \
         market {market_position:.0}, loyalty {customer_loyalty:.0}, ops {operational_health:.0})"
    );

    ScoreBreakdown {
        profitability,
        growth,
        market_position,
        customer_loyalty,
        operational_health,
        total,
    }
}

/// Composite score only.
pub fn final_score(history: &[MetricsVector]) -> u32 {
    score_breakdown(history).total
}

/// Percentile-style comparison against the fixed industry benchmarks.
/// Works from the first completed quarter onward.
pub fn benchmarks(history: &[MetricsVector]) -> BenchmarkReport {
    assert!(!history.is_empty(), "benchmarking over empty history");

    let revenue_pct = (avg(history, |m| m.revenue) / REVENUE_BENCHMARK * 100.0).min(100.0);
    let profit_pct = (avg(history, |m| m.net_profit) / PROFIT_BENCHMARK * 100.0).min(100.0);
    let market_share_pct =
        (avg(history, |m| m.market_share) / MARKET_SHARE_BENCHMARK * 100.0).min(100.0);
    let satisfaction_pct =
        (avg(history, |m| m.customer_satisfaction) / SATISFACTION_BENCHMARK * 100.0).min(100.0);

    let revenue_growth = if history.len() > 1 {
        (history[history.len() - 1].revenue - history[0].revenue) / history[0].revenue * 100.0
    } else {
        0.0
    };

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if revenue_pct >= 90.0 {
        strengths.push(BenchmarkNote {
            metric: "Revenue",
            message: "Significantly above industry average",
        });
    } else if revenue_pct < 70.0 {
        improvements.push(BenchmarkNote {
            metric: "Revenue",
            message: "Below industry benchmark - consider growth strategies",
        });
    }

    if profit_pct >= 90.0 {
        strengths.push(BenchmarkNote {
            metric: "Profitability",
            message: "Excellent profit management",
        });
    } else if profit_pct < 70.0 {
        improvements.push(BenchmarkNote {
            metric: "Profitability",
            message: "Focus on cost optimization and margin improvement",
        });
    }

    if market_share_pct >= 90.0 {
        strengths.push(BenchmarkNote {
            metric: "Market Position",
            message: "Strong competitive position",
        });
    } else if market_share_pct < 70.0 {
        improvements.push(BenchmarkNote {
            metric: "Market Share",
            message: "Increase marketing and competitive positioning",
        });
    }

    // Satisfaction runs tighter thresholds: the scale is compressed
    // (anything below 40 is unreachable), so 95/85 replace 90/70.
    if satisfaction_pct >= 95.0 {
        strengths.push(BenchmarkNote {
            metric: "Customer Loyalty",
            message: "Outstanding customer satisfaction",
        });
    } else if satisfaction_pct < 85.0 {
        improvements.push(BenchmarkNote {
            metric: "Customer Satisfaction",
            message: "Invest more in quality and service",
        });
    }

    BenchmarkReport {
        overall: ((revenue_pct + profit_pct + market_share_pct + satisfaction_pct) / 4.0).round()
            as u32,
        revenue_percent: revenue_pct.round() as u32,
        profit_percent: profit_pct.round() as u32,
        market_share_percent: market_share_pct.round() as u32,
        satisfaction_percent: satisfaction_pct.round() as u32,
        growth: (50.0 + revenue_growth).clamp(0.0, 100.0).round() as u32,
        strengths,
        improvements,
    }
}

/// End-of-run takeaways keyed on fixed performance thresholds.
pub fn learning_insights(history: &[MetricsVector]) -> Vec<&'static str> {
    assert!(!history.is_empty(), "insights over empty history");

    let first = &history[0];
    let last = &history[history.len() - 1];
    let mut insights = Vec::new();

    let revenue_growth = last.revenue - first.revenue;
    if revenue_growth > 20.0 {
        insights.push("Excellent revenue growth - you successfully scaled the business");
    } else if revenue_growth < 0.0 {
        insights.push("Revenue declined - consider balancing pricing and market investment");
    }

    let avg_profit = avg(history, |m| m.net_profit);
    if avg_profit > 18.0 {
        insights.push("Strong profitability management throughout the simulation");
    } else if avg_profit < 12.0 {
        insights.push("Profitability was challenged - watch spending on marketing and quality");
    }

    let avg_satisfaction = avg(history, |m| m.customer_satisfaction);
    if avg_satisfaction > 80.0 {
        insights.push("You maintained high customer satisfaction - this drives long-term loyalty");
    } else if avg_satisfaction < 65.0 {
        insights.push("Customer satisfaction needs attention - invest more in quality and service");
    }

    let share_growth = last.market_share - first.market_share;
    if share_growth > 5.0 {
        insights.push("Great market share expansion through effective marketing");
    } else if share_growth < -5.0 {
        insights.push("Market share declined - pricing and marketing balance is crucial");
    }

    if last.cash_position < 10.0 {
        insights.push("Cash position became tight - maintain stronger financial reserves");
    } else if last.cash_position > 30.0 {
        insights.push("Strong cash reserves maintained - good financial management");
    }

    insights.push("Understanding trade-offs between growth and profitability is key to success");
    insights.push("Quality investments yield long-term benefits in customer retention");

    insights
}
