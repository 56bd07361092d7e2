//! The quarterly state-transition function.
//!
//! RULES:
//!   - Exactly two RNG draws per transition, in a fixed order:
//!     (1) market growth in [0, 0.02), (2) productivity noise in [-3, 2).
//!     Reordering the draws breaks replay determinism.
//!   - Everything else is a pure function of (prev, decision).
//!   - The caller appends the result to the history; this module
//!     holds no state.

use crate::{
    decision::DecisionInput,
    metrics::{
        MetricsVector, CASH_FLOOR, MARGIN_RANGE, MARKET_SHARE_RANGE, PRODUCTIVITY_RANGE,
        SATISFACTION_RANGE,
    },
    rng::RandomSource,
};

/// Compute quarter `prev.quarter + 1` from the previous state and the
/// submitted decision. Never fails: all inputs are plain numbers and
/// every bounded output field is clamped.
pub fn transition(
    prev: &MetricsVector,
    d: &DecisionInput,
    rng: &mut dyn RandomSource,
) -> MetricsVector {
    // Draw 1: market growth factor, uniform in [0, 2%).
    let market_growth = rng.next_f64() * 0.02;

    let marketing_effect = d.marketing / 100.0 * 0.15;
    let pricing_effect = (d.pricing - 100.0) / 500.0;
    let efficiency_effect = d.efficiency / 100.0 * 0.05;

    let revenue_multiplier =
        1.0 + market_growth + marketing_effect - pricing_effect + efficiency_effect;
    let revenue = prev.revenue * revenue_multiplier * (d.pricing / 100.0);

    // Quality spend compresses the margin; efficiency recovers some of it.
    let gross_margin = (prev.gross_margin - d.quality / 100.0 * 10.0
        + d.efficiency / 100.0 * 5.0)
        .clamp(MARGIN_RANGE.0, MARGIN_RANGE.1);

    let marketing_spend = d.marketing * 0.5;
    let quality_costs = revenue * d.quality / 100.0;
    let net_profit = revenue * (gross_margin / 100.0) - marketing_spend - quality_costs;

    let market_share = (prev.market_share + d.marketing / 100.0 * 2.0
        - (d.pricing - 100.0) / 50.0
        + (prev.customer_satisfaction - 75.0) / 100.0)
        .clamp(MARKET_SHARE_RANGE.0, MARKET_SHARE_RANGE.1);

    let customer_satisfaction = (prev.customer_satisfaction + d.quality / 100.0 * 8.0
        - (d.pricing - 100.0) / 5.0
        + d.efficiency / 100.0 * 2.0)
        .clamp(SATISFACTION_RANGE.0, SATISFACTION_RANGE.1);

    let raw_cash = prev.cash_position + net_profit - marketing_spend - d.quality * 0.3;
    let cash_position = raw_cash.max(CASH_FLOOR);
    if raw_cash < CASH_FLOOR {
        log::warn!(
            "Q{}: cash floored at ${CASH_FLOOR}M (uncapped position was ${raw_cash:.1}M)",
            prev.quarter + 1
        );
    }

    // Draw 2: productivity noise, uniform in [-3, 2).
    let noise = rng.next_f64() * 5.0 - 3.0;
    let employee_productivity = (prev.employee_productivity + d.efficiency / 100.0 * 5.0 + noise)
        .clamp(PRODUCTIVITY_RANGE.0, PRODUCTIVITY_RANGE.1);

    log::debug!(
        "Q{}: market_growth={market_growth:.4} productivity_noise={noise:.2}",
        prev.quarter + 1
    );

    MetricsVector {
        quarter: prev.quarter + 1,
        revenue,
        gross_margin,
        net_profit,
        market_share,
        customer_satisfaction,
        cash_position,
        employee_productivity,
        base_price: prev.base_price,
    }
}
