//! techflow-core: the simulation engine and analytics layer for the
//! TechFlow quarterly business simulation.
//!
//! A run is 8 turns. Each turn the player allocates four levers
//! (marketing, quality, pricing, efficiency); the transition engine
//! derives the next quarter's business metrics; the analytics modules
//! answer read-only queries over the accumulated history. The
//! presentation layer (screens, charts, downloads) lives elsewhere
//! and only ever talks to [`controller::SimulationController`].
//!
//! Determinism: the only randomness is two uniform draws per
//! transition, pulled from an injectable [`rng::RandomSource`]. Same
//! seed, same decision script, identical run.

pub mod controller;
pub mod decision;
pub mod error;
pub mod export;
pub mod history;
pub mod insights;
pub mod metrics;
pub mod rng;
pub mod scenario;
pub mod scoring;
pub mod stats;
pub mod transition;
pub mod types;

pub use controller::{DescriptiveStats, Prediction, SimView, SimulationController, Trend};
pub use decision::{DecisionInput, DecisionRecord};
pub use error::{SimError, SimResult};
pub use history::HistoryStore;
pub use insights::{AiAnalysis, Anomaly, Insight, Recommendation, StrategicShift, StrategyProfile};
pub use metrics::{MetricField, MetricsVector};
pub use rng::{FixedSource, RandomSource, ScriptedSource, SimRng};
pub use scenario::WhatIfImpact;
pub use scoring::{BenchmarkReport, ScoreBreakdown};
pub use stats::{Regression, Summary};
pub use types::{Quarter, RunId, TOTAL_QUARTERS};
