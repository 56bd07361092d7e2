//! Append-only run history: one metrics snapshot per quarter plus the
//! decision that produced it.
//!
//! RULES:
//!   - Entry 0 is always the seeded initial state.
//!   - Metrics entry N (N >= 1) pairs with decision entry N-1.
//!   - Appended vectors are never mutated; analytics take slices.

use crate::{
    decision::{DecisionInput, DecisionRecord},
    metrics::{MetricField, MetricsVector},
    types::Quarter,
};

#[derive(Debug, Clone)]
pub struct HistoryStore {
    metrics: Vec<MetricsVector>,
    decisions: Vec<DecisionRecord>,
}

impl HistoryStore {
    /// A fresh store seeded with the fixed quarter-0 state.
    pub fn seeded() -> Self {
        Self {
            metrics: vec![MetricsVector::initial()],
            decisions: Vec::new(),
        }
    }

    /// Append one completed quarter. The metrics vector and the
    /// decision must carry the same quarter number.
    pub fn append(&mut self, metrics: MetricsVector, decision: DecisionInput) {
        debug_assert_eq!(
            metrics.quarter,
            self.metrics.len() as Quarter,
            "quarters must append in order"
        );
        self.decisions.push(DecisionRecord {
            quarter: metrics.quarter,
            decision,
        });
        self.metrics.push(metrics);
    }

    /// Number of post-initial quarters completed so far.
    pub fn quarters_completed(&self) -> Quarter {
        (self.metrics.len() - 1) as Quarter
    }

    /// The latest metrics snapshot (quarter 0 on a fresh run).
    pub fn current(&self) -> &MetricsVector {
        self.metrics.last().expect("store is never empty")
    }

    /// All snapshots, quarter 0 included.
    pub fn all(&self) -> &[MetricsVector] {
        &self.metrics
    }

    /// Completed quarters only (1..), the slice analytics run over.
    pub fn completed(&self) -> &[MetricsVector] {
        &self.metrics[1..]
    }

    pub fn get(&self, quarter: Quarter) -> Option<&MetricsVector> {
        self.metrics.get(quarter as usize)
    }

    pub fn decisions(&self) -> &[DecisionRecord] {
        &self.decisions
    }

    /// The decision that produced `quarter`, if it was submitted.
    pub fn decision_for(&self, quarter: Quarter) -> Option<&DecisionInput> {
        self.decisions
            .get(quarter.checked_sub(1)? as usize)
            .map(|r| &r.decision)
    }

    /// One metric field over the completed quarters, in order.
    pub fn series(&self, field: MetricField) -> Vec<f64> {
        self.completed().iter().map(|m| m.field(field)).collect()
    }

    /// Drop everything and reseed quarter 0. Restart semantics.
    pub fn reset(&mut self) {
        self.metrics.clear();
        self.metrics.push(MetricsVector::initial());
        self.decisions.clear();
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}
