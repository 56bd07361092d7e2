use crate::types::Quarter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("No completed quarters yet - analytics require at least one submitted decision")]
    NoCompletedQuarters,

    #[error("Decision already submitted for quarter {quarter}")]
    DecisionAlreadySubmitted { quarter: Quarter },

    #[error("Run is complete - all {total} quarters have been played", total = crate::types::TOTAL_QUARTERS)]
    RunComplete,

    #[error("Run incomplete: final report requires all {total} quarters, {completed} completed", total = crate::types::TOTAL_QUARTERS)]
    RunIncomplete { completed: Quarter },

    #[error("Quarter {quarter} out of range: {completed} quarters completed")]
    QuarterOutOfRange { quarter: Quarter, completed: Quarter },

    #[error("Invalid view for this operation: expected {expected}, currently in {actual}")]
    InvalidView {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
