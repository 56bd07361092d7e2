//! The quarterly business-state vector and its invariants.
//!
//! RULES:
//!   - Bounded fields always lie inside their clamp range after a
//!     transition, no matter how extreme the decision inputs were.
//!   - `base_price` is set once at run start and never changes.
//!   - A MetricsVector is created exactly once (seed or transition)
//!     and is immutable thereafter.

use crate::types::Quarter;
use serde::{Deserialize, Serialize};

// Clamp ranges. The transition engine applies these; nothing else
// in the crate is allowed to mutate a stored vector.
pub const MARGIN_RANGE: (f64, f64) = (40.0, 75.0);
pub const MARKET_SHARE_RANGE: (f64, f64) = (5.0, 45.0);
pub const SATISFACTION_RANGE: (f64, f64) = (40.0, 100.0);
pub const PRODUCTIVITY_RANGE: (f64, f64) = (60.0, 100.0);
pub const CASH_FLOOR: f64 = 5.0;

/// One quarter's business state. Field names serialize in camelCase
/// so JSON exports match the documented export shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsVector {
    pub quarter: Quarter,
    /// $M, >= 0.
    pub revenue: f64,
    /// %, clamped to [40, 75].
    pub gross_margin: f64,
    /// $M, unbounded sign.
    pub net_profit: f64,
    /// %, clamped to [5, 45].
    pub market_share: f64,
    /// Index, clamped to [40, 100].
    pub customer_satisfaction: f64,
    /// $M, floored at 5.
    pub cash_position: f64,
    /// Index, clamped to [60, 100].
    pub employee_productivity: f64,
    /// Constant for the whole run, carried forward unchanged.
    pub base_price: f64,
}

impl MetricsVector {
    /// The fixed quarter-0 state every run starts from.
    pub fn initial() -> Self {
        Self {
            quarter: 0,
            revenue: 50.0,
            gross_margin: 65.0,
            net_profit: 15.0,
            market_share: 20.0,
            customer_satisfaction: 75.0,
            cash_position: 25.0,
            employee_productivity: 80.0,
            base_price: 100.0,
        }
    }

    /// Read one field by name. Analytics queries operate on series
    /// of a single field pulled out of the history.
    pub fn field(&self, field: MetricField) -> f64 {
        match field {
            MetricField::Revenue => self.revenue,
            MetricField::GrossMargin => self.gross_margin,
            MetricField::NetProfit => self.net_profit,
            MetricField::MarketShare => self.market_share,
            MetricField::CustomerSatisfaction => self.customer_satisfaction,
            MetricField::CashPosition => self.cash_position,
            MetricField::EmployeeProductivity => self.employee_productivity,
        }
    }

    /// True when every bounded field sits inside its documented range.
    /// The transition tests assert this for arbitrary inputs.
    pub fn within_bounds(&self) -> bool {
        self.gross_margin >= MARGIN_RANGE.0
            && self.gross_margin <= MARGIN_RANGE.1
            && self.market_share >= MARKET_SHARE_RANGE.0
            && self.market_share <= MARKET_SHARE_RANGE.1
            && self.customer_satisfaction >= SATISFACTION_RANGE.0
            && self.customer_satisfaction <= SATISFACTION_RANGE.1
            && self.cash_position >= CASH_FLOOR
            && self.employee_productivity >= PRODUCTIVITY_RANGE.0
            && self.employee_productivity <= PRODUCTIVITY_RANGE.1
    }
}

/// The analyzable fields of a MetricsVector.
/// `base_price` is constant and `quarter` is the key, so neither appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Revenue,
    GrossMargin,
    NetProfit,
    MarketShare,
    CustomerSatisfaction,
    CashPosition,
    EmployeeProductivity,
}

impl MetricField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::GrossMargin => "gross_margin",
            Self::NetProfit => "net_profit",
            Self::MarketShare => "market_share",
            Self::CustomerSatisfaction => "customer_satisfaction",
            Self::CashPosition => "cash_position",
            Self::EmployeeProductivity => "employee_productivity",
        }
    }

    pub const ALL: [MetricField; 7] = [
        Self::Revenue,
        Self::GrossMargin,
        Self::NetProfit,
        Self::MarketShare,
        Self::CustomerSatisfaction,
        Self::CashPosition,
        Self::EmployeeProductivity,
    ];
}
