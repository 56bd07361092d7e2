//! Narrative analytics: insight cards, strategy classification,
//! learning-curve and shift detection, anomaly detection, and
//! recommendations over the run so far.
//!
//! Everything here is a stateless read over history slices. The
//! numbers quoted in the messages come from the statistics module;
//! this module only words them.

use crate::{
    decision::DecisionRecord,
    metrics::{MetricField, MetricsVector},
    stats,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub message: String,
}

/// The insight cards shown on the analytics dashboard.
/// `history` is the completed-quarters slice; never empty.
pub fn advanced_insights(history: &[MetricsVector], decisions: &[DecisionRecord]) -> Vec<Insight> {
    assert!(!history.is_empty(), "insights over empty history");
    let mut insights = Vec::new();
    let n = history.len() as f64;

    if history.len() >= 2 {
        let growth = (history[history.len() - 1].revenue - history[0].revenue)
            / history[0].revenue
            * 100.0;
        insights.push(Insight {
            kind: if growth > 20.0 {
                InsightKind::Success
            } else if growth < 0.0 {
                InsightKind::Warning
            } else {
                InsightKind::Info
            },
            title: "Revenue Growth Rate",
            message: format!(
                "Your revenue has {} by {:.1}% over {} quarters ({:.1}% per quarter average).",
                if growth >= 0.0 { "grown" } else { "declined" },
                growth.abs(),
                history.len(),
                growth / n,
            ),
        });
    }

    let avg_profit = history.iter().map(|m| m.net_profit).sum::<f64>() / n;
    let total_revenue: f64 = history.iter().map(|m| m.revenue).sum();
    let profit_margin = avg_profit / total_revenue * n * 100.0;
    insights.push(Insight {
        kind: if profit_margin > 25.0 {
            InsightKind::Success
        } else if profit_margin < 15.0 {
            InsightKind::Warning
        } else {
            InsightKind::Info
        },
        title: "Profitability Analysis",
        message: format!(
            "Average profit margin of {:.1}%. {}",
            profit_margin,
            if profit_margin > 25.0 {
                "Excellent profitability!"
            } else if profit_margin < 15.0 {
                "Consider cost optimization."
            } else {
                "Healthy profit margins."
            },
        ),
    });

    let share_series: Vec<f64> = history.iter().map(|m| m.market_share).collect();
    let volatility = stats::descriptive_stats(&share_series).std_dev;
    insights.push(Insight {
        kind: if volatility < 2.0 {
            InsightKind::Success
        } else if volatility > 5.0 {
            InsightKind::Warning
        } else {
            InsightKind::Info
        },
        title: "Market Share Stability",
        message: format!(
            "Market share volatility: \u{b1}{:.1}%. {}",
            volatility,
            if volatility < 2.0 {
                "Very stable position."
            } else if volatility > 5.0 {
                "Highly volatile - consider consistency."
            } else {
                "Moderate fluctuation."
            },
        ),
    });

    if decisions.len() >= 2 {
        let quality: Vec<f64> = decisions.iter().map(|d| d.decision.quality).collect();
        let satisfaction: Vec<f64> = history.iter().map(|m| m.customer_satisfaction).collect();
        let r = stats::correlation(&quality, &satisfaction);
        insights.push(Insight {
            kind: if r > 0.5 {
                InsightKind::Success
            } else {
                InsightKind::Info
            },
            title: "Quality Investment Impact",
            message: format!(
                "Correlation between quality investment and satisfaction: {:.2}. {}",
                r,
                if r > 0.5 {
                    "Strong positive relationship!"
                } else {
                    "Moderate relationship observed."
                },
            ),
        });

        let avg_marketing =
            decisions.iter().map(|d| d.decision.marketing).sum::<f64>() / decisions.len() as f64;
        let avg_revenue = total_revenue / n;
        // ROI against the 50M starting revenue baseline.
        let roi = (avg_revenue - 50.0) / avg_marketing * 100.0;
        insights.push(Insight {
            kind: if roi > 50.0 {
                InsightKind::Success
            } else if roi < 20.0 {
                InsightKind::Warning
            } else {
                InsightKind::Info
            },
            title: "Marketing ROI",
            message: format!(
                "Average marketing spend: ${:.1}M with ROI of {:.0}%. {}",
                avg_marketing,
                roi,
                if roi > 50.0 {
                    "Excellent returns!"
                } else if roi < 20.0 {
                    "Consider optimization."
                } else {
                    "Decent returns."
                },
            ),
        });

        let pricing: Vec<f64> = decisions.iter().map(|d| d.decision.pricing).collect();
        let elasticity = stats::correlation(&pricing, &share_series);
        insights.push(Insight {
            kind: InsightKind::Info,
            title: "Price Elasticity",
            message: format!(
                "Price-to-market-share correlation: {:.2}. {}",
                elasticity,
                if elasticity < -0.3 {
                    "High price sensitivity detected."
                } else {
                    "Moderate price sensitivity."
                },
            ),
        });
    }

    insights
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyProfile {
    pub strategy_type: &'static str,
    pub description: &'static str,
}

/// Classify the player's overall strategy from average decision levels.
pub fn classify_strategy(decisions: &[DecisionRecord]) -> StrategyProfile {
    let balanced = StrategyProfile {
        strategy_type: "Balanced",
        description: "You maintain a balanced approach across all decision areas.",
    };
    if decisions.is_empty() {
        return balanced;
    }

    let n = decisions.len() as f64;
    let avg_marketing = decisions.iter().map(|d| d.decision.marketing).sum::<f64>() / n;
    let avg_quality = decisions.iter().map(|d| d.decision.quality).sum::<f64>() / n;
    let avg_pricing = decisions.iter().map(|d| d.decision.pricing).sum::<f64>() / n;
    let avg_efficiency = decisions.iter().map(|d| d.decision.efficiency).sum::<f64>() / n;

    if avg_marketing > 70.0 && avg_pricing < 95.0 {
        StrategyProfile {
            strategy_type: "Growth-Focused",
            description: "Your strategy prioritizes market expansion through aggressive \
                          marketing and competitive pricing.",
        }
    } else if avg_quality > 70.0 && avg_efficiency > 70.0 {
        StrategyProfile {
            strategy_type: "Quality & Efficiency",
            description: "You focus on operational excellence and product quality for \
                          sustainable competitive advantage.",
        }
    } else if avg_pricing > 110.0 && avg_efficiency > 60.0 {
        StrategyProfile {
            strategy_type: "Profitability-Focused",
            description: "Your strategy emphasizes profit maximization through premium \
                          pricing and cost control.",
        }
    } else if avg_quality > 65.0 && avg_marketing > 65.0 {
        StrategyProfile {
            strategy_type: "Customer-Centric",
            description: "You balance quality and marketing to build strong customer \
                          relationships and brand loyalty.",
        }
    } else {
        balanced
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub quarter: crate::types::Quarter,
    pub z_score: f64,
    pub reason: String,
}

/// Flag quarters whose net profit deviates more than 1.5 population
/// standard deviations from the run mean. A constant-profit history
/// has zero stddev, NaN z-scores, and therefore no anomalies.
pub fn profit_anomalies(history: &[MetricsVector]) -> Vec<Anomaly> {
    assert!(!history.is_empty(), "anomaly scan over empty history");

    let series: Vec<f64> = history.iter().map(|m| m.net_profit).collect();
    let summary = stats::descriptive_stats(&series);

    history
        .iter()
        .filter_map(|m| {
            let z = (m.net_profit - summary.mean) / summary.std_dev;
            if z.abs() > 1.5 {
                Some(Anomaly {
                    quarter: m.quarter,
                    z_score: z,
                    reason: format!(
                        "{} profit performance ({}{:.1}M deviation)",
                        if z > 0.0 { "Exceptional" } else { "Below-average" },
                        if z > 0.0 { "+" } else { "" },
                        z * summary.std_dev,
                    ),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Plain-language read on whether decision quality improved over the
/// run: average second-half profit against the first half. Needs at
/// least four completed quarters for the split to mean anything.
pub fn learning_curve(history: &[MetricsVector]) -> String {
    let fallback = "Continue refining your decision-making process.";
    if history.len() < 4 {
        return fallback.to_string();
    }

    let half = history.len() / 2;
    let first =
        history[..half].iter().map(|m| m.net_profit).sum::<f64>() / half as f64;
    let second = history[half..].iter().map(|m| m.net_profit).sum::<f64>()
        / (history.len() - half) as f64;
    let improvement = (second - first) / first * 100.0;

    if improvement > 15.0 {
        format!(
            "Your decision quality improved significantly by {:.0}% in the second \
             half of the simulation. You're learning effectively!",
            improvement,
        )
    } else if improvement > 5.0 {
        format!(
            "Your performance improved by {:.0}% as you progressed through the \
             simulation.",
            improvement,
        )
    } else if improvement < -10.0 {
        "Performance declined in later quarters. Review your early successful \
         strategies."
            .to_string()
    } else {
        fallback.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicShift {
    pub quarter: crate::types::Quarter,
    pub description: String,
}

/// Large quarter-over-quarter lever swings in the opening quarters:
/// marketing moves of more than 30 points, pricing moves of more
/// than 15. Only the first three transitions are scanned, and only
/// once three decisions exist. Empty means a consistent strategy.
pub fn strategic_shifts(decisions: &[DecisionRecord]) -> Vec<StrategicShift> {
    let mut shifts = Vec::new();
    if decisions.len() < 3 {
        return shifts;
    }

    for pair in decisions[..decisions.len().min(4)].windows(2) {
        let (prev, curr) = (&pair[0].decision, &pair[1].decision);

        if (curr.marketing - prev.marketing).abs() > 30.0 {
            shifts.push(StrategicShift {
                quarter: pair[1].quarter,
                description: format!(
                    "Major {} in marketing investment",
                    if curr.marketing > prev.marketing {
                        "increase"
                    } else {
                        "decrease"
                    },
                ),
            });
        }
        if (curr.pricing - prev.pricing).abs() > 15.0 {
            shifts.push(StrategicShift {
                quarter: pair[1].quarter,
                description: format!(
                    "Significant pricing adjustment from {:.0}% to {:.0}%",
                    prev.pricing, curr.pricing,
                ),
            });
        }
    }
    shifts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: &'static str,
    pub message: &'static str,
}

/// Threshold-keyed advice off the latest quarter's metrics. Always
/// returns at least one entry.
pub fn recommendations(latest: &MetricsVector) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if latest.net_profit < 15.0 {
        recs.push(Recommendation {
            title: "Improve Profitability",
            message: "Focus on operational efficiency and review your cost structure. \
                      Consider optimizing quality investments and marketing spend.",
        });
    }
    if latest.market_share < 20.0 {
        recs.push(Recommendation {
            title: "Grow Market Share",
            message: "Increase marketing investment and consider more competitive \
                      pricing to expand market presence.",
        });
    }
    if latest.customer_satisfaction < 70.0 {
        recs.push(Recommendation {
            title: "Enhance Customer Satisfaction",
            message: "Increase quality investments and ensure pricing aligns with \
                      value delivered to customers.",
        });
    }
    if recs.is_empty() {
        recs.push(Recommendation {
            title: "Maintain Excellence",
            message: "Your performance is strong across all metrics. Continue your \
                      current strategy while monitoring market conditions.",
        });
    }
    recs
}

/// The analysis bundle behind the final report's AI tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub strategy: StrategyProfile,
    pub learning_curve: String,
    pub shifts: Vec<StrategicShift>,
    pub anomalies: Vec<Anomaly>,
    pub recommendations: Vec<Recommendation>,
}

/// One pass over the whole run: strategy, learning curve, shifts,
/// anomalies, and recommendations. `history` is the completed
/// slice; never empty.
pub fn ai_analysis(history: &[MetricsVector], decisions: &[DecisionRecord]) -> AiAnalysis {
    assert!(!history.is_empty(), "analysis over empty history");
    AiAnalysis {
        strategy: classify_strategy(decisions),
        learning_curve: learning_curve(history),
        shifts: strategic_shifts(decisions),
        anomalies: profit_anomalies(history),
        recommendations: recommendations(&history[history.len() - 1]),
    }
}

/// Full correlation matrix over the requested fields, completed
/// quarters only. Symmetric, diagonal 1 for non-constant series.
pub fn correlation_matrix(history: &[MetricsVector], fields: &[MetricField]) -> Vec<Vec<f64>> {
    assert!(!history.is_empty(), "correlation matrix over empty history");

    let series: Vec<Vec<f64>> = fields
        .iter()
        .map(|f| history.iter().map(|m| m.field(*f)).collect())
        .collect();

    series
        .iter()
        .map(|row| series.iter().map(|col| stats::correlation(row, col)).collect())
        .collect()
}
