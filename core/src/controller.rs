//! The simulation controller - run state machine and query surface.
//!
//! VIEW FLOW (fixed, guarded):
//!   Welcome -> Dashboard <-> Decisions -> Results -> Dashboard (quarter < 8)
//!                                                 | Final     (quarter == 8)
//!   Final -> Welcome on restart.
//!
//! RULES:
//!   - One decision per quarter, enforced; the quarter only advances
//!     after a submitted decision has produced a results view.
//!   - The controller owns the history exclusively. Analytics are
//!     stateless reads over slices of it.
//!   - One controller instance per run; concurrent runs need
//!     separate instances, nothing here is shared.

use crate::{
    decision::{DecisionInput, DecisionRecord},
    error::{SimError, SimResult},
    export,
    history::HistoryStore,
    insights::{self, AiAnalysis, Anomaly, Insight, StrategyProfile},
    metrics::{MetricField, MetricsVector},
    rng::{RandomSource, SimRng},
    scenario::{self, WhatIfImpact},
    scoring::{self, BenchmarkReport, ScoreBreakdown},
    stats::{self, Summary},
    types::{Quarter, RunId, TOTAL_QUARTERS},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimView {
    Welcome,
    Dashboard,
    Decisions,
    Results,
    Final,
}

impl SimView {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Dashboard => "dashboard",
            Self::Decisions => "decisions",
            Self::Results => "results",
            Self::Final => "final",
        }
    }
}

/// Per-metric summaries for the analytics overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStats {
    pub revenue: Summary,
    pub profit: Summary,
    pub market_share: Summary,
    pub satisfaction: Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Growing,
    Declining,
    Stable,
}

/// OLS forecast for one metric: next two quarters plus the 95%
/// normal-approximation interval around the next-quarter point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub field: MetricField,
    pub next: f64,
    pub next2: f64,
    pub lower: f64,
    pub upper: f64,
    pub trend: Trend,
}

pub struct SimulationController {
    run_id: RunId,
    view: SimView,
    current_quarter: Quarter,
    draft: DecisionInput,
    history: HistoryStore,
    rng: Box<dyn RandomSource>,
}

impl SimulationController {
    /// A fresh run with a PCG stream derived from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(uuid::Uuid::new_v4().to_string(), Box::new(SimRng::new(seed)))
    }

    /// A fresh run with an injected random source. Tests use this to
    /// pin the two draws per transition.
    pub fn with_rng(run_id: RunId, rng: Box<dyn RandomSource>) -> Self {
        Self {
            run_id,
            view: SimView::Welcome,
            current_quarter: 1,
            draft: DecisionInput::default(),
            history: HistoryStore::seeded(),
            rng,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn view(&self) -> SimView {
        self.view
    }

    /// The quarter currently being decided (1-based; stays at 8 once
    /// the run completes).
    pub fn current_quarter(&self) -> Quarter {
        self.current_quarter
    }

    pub fn draft(&self) -> &DecisionInput {
        &self.draft
    }

    /// Update the draft decision without committing it. Sliders call
    /// this on every change; nothing transitions until submit.
    pub fn set_draft(&mut self, draft: DecisionInput) {
        self.draft = draft;
    }

    // ── View navigation ─────────────────────────────────────────────

    pub fn start(&mut self) -> SimResult<()> {
        self.expect_view(SimView::Welcome, "welcome")?;
        self.view = SimView::Dashboard;
        Ok(())
    }

    pub fn open_decisions(&mut self) -> SimResult<()> {
        self.expect_view(SimView::Dashboard, "dashboard")?;
        self.view = SimView::Decisions;
        Ok(())
    }

    pub fn back_to_dashboard(&mut self) -> SimResult<()> {
        self.expect_view(SimView::Decisions, "decisions")?;
        self.view = SimView::Dashboard;
        Ok(())
    }

    /// Leave the results view: on to the next quarter's dashboard, or
    /// the final report after the eighth submission.
    pub fn advance_quarter(&mut self) -> SimResult<()> {
        self.expect_view(SimView::Results, "results")?;
        if self.current_quarter < TOTAL_QUARTERS {
            self.current_quarter += 1;
            self.draft = DecisionInput::default();
            self.view = SimView::Dashboard;
        } else {
            self.view = SimView::Final;
        }
        Ok(())
    }

    /// Wipe the run and return to the welcome screen: history back to
    /// the single quarter-0 entry, draft back to defaults. The RNG
    /// stream is NOT rewound; a restarted run continues the stream.
    pub fn restart(&mut self) {
        self.history.reset();
        self.current_quarter = 1;
        self.draft = DecisionInput::default();
        self.view = SimView::Welcome;
        log::info!("run {} restarted", self.run_id);
    }

    // ── Decision submission ─────────────────────────────────────────

    /// Commit a decision for the current quarter and run the
    /// transition. Moves to the results view on success.
    pub fn submit_decision(&mut self, decision: DecisionInput) -> SimResult<&MetricsVector> {
        match self.view {
            SimView::Dashboard | SimView::Decisions => {}
            other => {
                return Err(SimError::InvalidView {
                    expected: "dashboard or decisions",
                    actual: other.name(),
                })
            }
        }
        if self.history.quarters_completed() >= TOTAL_QUARTERS {
            return Err(SimError::RunComplete);
        }
        if self.history.quarters_completed() >= self.current_quarter {
            return Err(SimError::DecisionAlreadySubmitted {
                quarter: self.current_quarter,
            });
        }

        let next = crate::transition::transition(self.history.current(), &decision, &mut *self.rng);
        log::info!(
            "Q{}: revenue=${:.1}M margin={:.1}% profit=${:.1}M share={:.1}% csat={:.0} cash=${:.1}M",
            next.quarter,
            next.revenue,
            next.gross_margin,
            next.net_profit,
            next.market_share,
            next.customer_satisfaction,
            next.cash_position,
        );
        self.history.append(next, decision);
        self.draft = decision;
        self.view = SimView::Results;
        Ok(self.history.current())
    }

    // ── State reads ─────────────────────────────────────────────────

    /// Current (latest) metrics snapshot.
    pub fn metrics(&self) -> &MetricsVector {
        self.history.current()
    }

    /// All snapshots including the seeded quarter 0.
    pub fn history(&self) -> &[MetricsVector] {
        self.history.all()
    }

    pub fn decision_history(&self) -> &[DecisionRecord] {
        self.history.decisions()
    }

    fn completed(&self) -> SimResult<&[MetricsVector]> {
        let completed = self.history.completed();
        if completed.is_empty() {
            return Err(SimError::NoCompletedQuarters);
        }
        Ok(completed)
    }

    fn expect_view(&self, expected: SimView, name: &'static str) -> SimResult<()> {
        if self.view != expected {
            return Err(SimError::InvalidView {
                expected: name,
                actual: self.view.name(),
            });
        }
        Ok(())
    }

    // ── Analytics queries (read-only over the history snapshot) ─────

    /// Summaries of the four headline metrics over completed quarters.
    pub fn descriptive_stats(&self) -> SimResult<DescriptiveStats> {
        self.completed()?;
        Ok(DescriptiveStats {
            revenue: stats::descriptive_stats(&self.history.series(MetricField::Revenue)),
            profit: stats::descriptive_stats(&self.history.series(MetricField::NetProfit)),
            market_share: stats::descriptive_stats(&self.history.series(MetricField::MarketShare)),
            satisfaction: stats::descriptive_stats(
                &self.history.series(MetricField::CustomerSatisfaction),
            ),
        })
    }

    /// Summary of a single metric field.
    pub fn field_stats(&self, field: MetricField) -> SimResult<Summary> {
        self.completed()?;
        Ok(stats::descriptive_stats(&self.history.series(field)))
    }

    /// Pairwise Pearson correlations between the requested fields.
    pub fn correlation_matrix(&self, fields: &[MetricField]) -> SimResult<Vec<Vec<f64>>> {
        Ok(insights::correlation_matrix(self.completed()?, fields))
    }

    /// OLS forecast of `field` for the next two quarters.
    pub fn predict(&self, field: MetricField) -> SimResult<Prediction> {
        let completed = self.completed()?;
        let points: Vec<(f64, f64)> = completed
            .iter()
            .enumerate()
            .map(|(i, m)| ((i + 1) as f64, m.field(field)))
            .collect();
        let fit = stats::linear_regression(&points);
        let next = fit.predict((completed.len() + 1) as f64);
        let next2 = fit.predict((completed.len() + 2) as f64);

        let series: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
        let std_dev = stats::descriptive_stats(&series).std_dev;
        let (lower, upper) = stats::prediction_interval(next, std_dev);

        let trend = if fit.slope > 0.5 {
            Trend::Growing
        } else if fit.slope < -0.5 {
            Trend::Declining
        } else {
            Trend::Stable
        };

        Ok(Prediction {
            field,
            next,
            next2,
            lower,
            upper,
            trend,
        })
    }

    /// What-if projection against the decision taken in `base_quarter`.
    /// Falls back to the default decision when the quarter predates
    /// the decision log (possible after a restart mid-inspection).
    pub fn what_if(
        &self,
        base_quarter: Quarter,
        hypothetical: DecisionInput,
    ) -> SimResult<WhatIfImpact> {
        let completed = self.history.quarters_completed();
        if completed == 0 {
            return Err(SimError::NoCompletedQuarters);
        }
        if base_quarter == 0 || base_quarter > completed {
            return Err(SimError::QuarterOutOfRange {
                quarter: base_quarter,
                completed,
            });
        }
        let base = self
            .history
            .decision_for(base_quarter)
            .copied()
            .unwrap_or_default();
        Ok(scenario::project(&base, &hypothetical))
    }

    // ── Scoring and reporting ───────────────────────────────────────

    /// The composite final score. Only meaningful over a full run.
    pub fn final_score(&self) -> SimResult<u32> {
        Ok(self.score_breakdown()?.total)
    }

    pub fn score_breakdown(&self) -> SimResult<ScoreBreakdown> {
        let completed = self.history.quarters_completed();
        if completed < TOTAL_QUARTERS {
            return Err(SimError::RunIncomplete { completed });
        }
        Ok(scoring::score_breakdown(self.history.completed()))
    }

    /// Benchmark comparison; available from the first completed
    /// quarter (the running benchmarking tab uses it mid-run).
    pub fn benchmarks(&self) -> SimResult<BenchmarkReport> {
        Ok(scoring::benchmarks(self.completed()?))
    }

    pub fn learning_insights(&self) -> SimResult<Vec<&'static str>> {
        Ok(scoring::learning_insights(self.completed()?))
    }

    pub fn advanced_insights(&self) -> SimResult<Vec<Insight>> {
        Ok(insights::advanced_insights(
            self.completed()?,
            self.history.decisions(),
        ))
    }

    pub fn strategy(&self) -> StrategyProfile {
        insights::classify_strategy(self.history.decisions())
    }

    pub fn profit_anomalies(&self) -> SimResult<Vec<Anomaly>> {
        Ok(insights::profit_anomalies(self.completed()?))
    }

    /// The full analysis bundle: strategy, learning curve, strategic
    /// shifts, anomalies, and recommendations in one read.
    pub fn ai_analysis(&self) -> SimResult<AiAnalysis> {
        Ok(insights::ai_analysis(
            self.completed()?,
            self.history.decisions(),
        ))
    }

    // ── Exports ─────────────────────────────────────────────────────

    /// Metrics CSV over completed quarters (quarter 0 excluded).
    pub fn export_metrics_csv(&self) -> String {
        export::metrics_csv(self.history.completed())
    }

    pub fn export_decisions_csv(&self) -> String {
        export::decisions_csv(self.history.decisions())
    }

    /// Full-precision JSON snapshot: history (quarter 0 included),
    /// decisions, and the current quarter.
    pub fn export_json(&self) -> SimResult<String> {
        export::json_export(
            self.history.all(),
            self.history.decisions(),
            self.current_quarter,
        )
    }
}
