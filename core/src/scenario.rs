//! Scenario ("what-if") projection - a linear sensitivity estimate.
//!
//! RULE: This module is deliberately independent of the transition
//! engine. It answers "roughly what moves if I nudge these sliders"
//! without re-running a quarter, so its numbers may diverge from an
//! actual transition. That divergence is intentional: fast
//! approximate feedback here, authoritative simulation there.

use crate::decision::DecisionInput;
use serde::{Deserialize, Serialize};

// A lever only earns an insight line when it moved enough to matter.
const MARKETING_INSIGHT_THRESHOLD: f64 = 0.2;
const QUALITY_INSIGHT_THRESHOLD: f64 = 0.2;
const PRICING_INSIGHT_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfImpact {
    /// Estimated revenue change, %.
    pub revenue_change_pct: f64,
    /// Estimated profit change, %.
    pub profit_change_pct: f64,
    /// Estimated market share change, %.
    pub market_share_change_pct: f64,
    /// Estimated satisfaction change, points.
    pub satisfaction_change_pts: f64,
    pub insights: Vec<String>,
}

/// Estimate the deltas a hypothetical decision would produce relative
/// to the decision actually taken.
pub fn project(base: &DecisionInput, hypothetical: &DecisionInput) -> WhatIfImpact {
    let marketing_delta = (hypothetical.marketing - base.marketing) / 100.0;
    let quality_delta = (hypothetical.quality - base.quality) / 100.0;
    let pricing_delta = (hypothetical.pricing - base.pricing) / 100.0;
    let efficiency_delta = (hypothetical.efficiency - base.efficiency) / 100.0;

    let revenue_change = marketing_delta * 15.0 - pricing_delta * 10.0 + efficiency_delta * 5.0;
    let profit_change = revenue_change * 0.5 - marketing_delta * 20.0 - quality_delta * 15.0
        + efficiency_delta * 10.0;
    let market_share_change = marketing_delta * 20.0 - pricing_delta * 15.0;
    let satisfaction_change =
        quality_delta * 15.0 - pricing_delta * 5.0 + efficiency_delta * 3.0;

    let mut insights = Vec::new();
    if marketing_delta.abs() > MARKETING_INSIGHT_THRESHOLD {
        insights.push(format!(
            "{} marketing by {:.0}% would {} revenue by ~{:.1}%",
            if marketing_delta > 0.0 { "Increasing" } else { "Decreasing" },
            (marketing_delta * 100.0).abs(),
            if marketing_delta > 0.0 { "boost" } else { "reduce" },
            (marketing_delta * 15.0).abs(),
        ));
    }
    if pricing_delta.abs() > PRICING_INSIGHT_THRESHOLD {
        insights.push(format!(
            "{} prices by {:.0}% would impact market share by {:.1}%",
            if pricing_delta > 0.0 { "Raising" } else { "Lowering" },
            (pricing_delta * 100.0).abs(),
            pricing_delta * -15.0,
        ));
    }
    if quality_delta.abs() > QUALITY_INSIGHT_THRESHOLD {
        insights.push(format!(
            "{} quality investment would change satisfaction by {:.0} points",
            if quality_delta > 0.0 { "Increasing" } else { "Decreasing" },
            quality_delta * 15.0,
        ));
    }
    if insights.is_empty() {
        insights.push("Adjust sliders to see estimated impacts".to_string());
    }

    WhatIfImpact {
        revenue_change_pct: revenue_change,
        profit_change_pct: profit_change,
        market_share_change_pct: market_share_change,
        satisfaction_change_pts: satisfaction_change,
        insights,
    }
}
