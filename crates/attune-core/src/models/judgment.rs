//! Typed results for externally produced judge output.
//!
//! The scorer calls themselves live outside this core; what crosses the
//! boundary is either a scored judgment or an explicit unavailability with
//! a reason. Falling back to the neutral midpoint is a visible branch
//! (`scored_or_neutral`), never a silent catch.

use serde::{Deserialize, Serialize};

use crate::feedback::JudgeScores;

/// Outcome of one external judge call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Judgment<T> {
    Scored(T),
    Unavailable { reason: String },
}

impl<T> Judgment<T> {
    pub fn is_scored(&self) -> bool {
        matches!(self, Self::Scored(_))
    }

    /// The scored value, or the supplied neutral default when the judge was
    /// unavailable. Callers choose the neutral explicitly.
    pub fn scored_or_neutral(self, neutral: T) -> T {
        match self {
            Self::Scored(value) => value,
            Self::Unavailable { .. } => neutral,
        }
    }
}

/// Retrieval-adequacy judgment: is the internal corpus enough for the query?
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalJudgment {
    /// Adequacy score on the judge's 0–10 scale.
    pub confidence: f64,
    /// The judge's own recommendation to fall back to web search.
    pub needs_web_search: bool,
    pub reasoning: String,
}

/// Answer-quality judgment along the three scored axes.
pub type AnswerJudgment = JudgeScores;
