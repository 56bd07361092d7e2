//! Export formatting: CSV at fixed decimal precision, JSON at full
//! precision. Round-trips core data exactly - the JSON export of two
//! identical runs is byte-identical, which the determinism test leans on.

use crate::{
    decision::DecisionRecord,
    error::SimResult,
    metrics::MetricsVector,
    types::Quarter,
};
use serde::{Deserialize, Serialize};

pub const METRICS_CSV_HEADER: &str = "Quarter,Revenue,Gross Margin,Net Profit,Market Share,\
Customer Satisfaction,Cash Position,Employee Productivity";

pub const DECISIONS_CSV_HEADER: &str = "Quarter,Marketing,Quality,Pricing,Efficiency";

/// Metrics history as CSV, one row per completed quarter.
/// Dollar and percentage fields carry 2 decimals; the satisfaction
/// and productivity indices are whole numbers.
pub fn metrics_csv(history: &[MetricsVector]) -> String {
    let mut csv = String::from(METRICS_CSV_HEADER);
    csv.push('\n');
    for m in history {
        csv.push_str(&format!(
            "{},{:.2},{:.2},{:.2},{:.2},{:.0},{:.2},{:.0}\n",
            m.quarter,
            m.revenue,
            m.gross_margin,
            m.net_profit,
            m.market_share,
            m.customer_satisfaction,
            m.cash_position,
            m.employee_productivity,
        ));
    }
    csv
}

/// Decision history as CSV, one row per submitted quarter.
pub fn decisions_csv(decisions: &[DecisionRecord]) -> String {
    let mut csv = String::from(DECISIONS_CSV_HEADER);
    csv.push('\n');
    for d in decisions {
        csv.push_str(&format!(
            "{},{:.2},{:.2},{:.2},{:.2}\n",
            d.quarter,
            d.decision.marketing,
            d.decision.quality,
            d.decision.pricing,
            d.decision.efficiency,
        ));
    }
    csv
}

/// The full-precision JSON export payload. History includes the
/// seeded quarter 0; nothing is rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub history: Vec<MetricsVector>,
    pub decisions: Vec<DecisionRecord>,
    pub current_quarter: Quarter,
}

pub fn json_export(
    history: &[MetricsVector],
    decisions: &[DecisionRecord],
    current_quarter: Quarter,
) -> SimResult<String> {
    let data = ExportData {
        history: history.to_vec(),
        decisions: decisions.to_vec(),
        current_quarter,
    };
    Ok(serde_json::to_string_pretty(&data)?)
}
