//! The four quarterly resource-allocation levers.
//!
//! RULE: The engine trusts these values. Range enforcement is the
//! submitting layer's job (sliders clamp before submission); an
//! out-of-range decision still produces a clamped MetricsVector,
//! just an out-of-envelope one.

use crate::types::Quarter;
use serde::{Deserialize, Serialize};

/// One quarter's decision, as submitted before the transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionInput {
    /// Marketing investment, [0, 100] ($M-equivalent spend).
    pub marketing: f64,
    /// Quality investment, [0, 100] (% of revenue).
    pub quality: f64,
    /// Price level, [80, 120] (% of base price).
    pub pricing: f64,
    /// Operational focus, [0, 100] (%).
    pub efficiency: f64,
}

impl Default for DecisionInput {
    /// The neutral mid-point every quarter's draft starts from.
    fn default() -> Self {
        Self {
            marketing: 50.0,
            quality: 50.0,
            pricing: 100.0,
            efficiency: 50.0,
        }
    }
}

/// A decision as it sits in the history log, keyed by the quarter
/// it produced. Decision for quarter N pairs with MetricsVector N.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub quarter: Quarter,
    #[serde(flatten)]
    pub decision: DecisionInput,
}
