//! User feedback records: the sole learning signal.
//!
//! A `FeedbackEntry` is immutable once appended to the log. Ids are derived
//! from the entry's 1-based sequence position and creation time, so they are
//! unique and monotonically increasing as long as appends are serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL_JUDGE_SCORE;

/// Positive or negative user rating of a past response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Positive,
    Negative,
}

impl FeedbackType {
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

/// Per-axis 0–10 judge scores for a generated answer.
///
/// Missing axes deserialize to the neutral midpoint (5.0) rather than
/// failing; a judge that could not score an axis is treated as undecided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeScores {
    pub relevance: f64,
    pub factuality: f64,
    pub completeness: f64,
}

impl Default for JudgeScores {
    fn default() -> Self {
        Self {
            relevance: NEUTRAL_JUDGE_SCORE,
            factuality: NEUTRAL_JUDGE_SCORE,
            completeness: NEUTRAL_JUDGE_SCORE,
        }
    }
}

impl JudgeScores {
    pub fn new(relevance: f64, factuality: f64, completeness: f64) -> Self {
        Self {
            relevance,
            factuality,
            completeness,
        }
    }
}

/// Metadata of one source document cited by a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMeta {
    pub doc_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rrf_score: Option<f64>,
}

/// Fields supplied by the caller when submitting feedback.
///
/// The store assigns `feedback_id` and `timestamp` at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeedback {
    pub response_id: String,
    pub query: String,
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceMeta>,
    pub feedback_type: FeedbackType,
    /// System confidence at response time, 0–1.
    pub confidence: f64,
    #[serde(default)]
    pub judge_scores: JudgeScores,
    pub retrieval_method: String,
    pub web_search_triggered: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

/// One persisted feedback record. Never mutated or removed once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub feedback_id: String,
    pub response_id: String,
    pub timestamp: DateTime<Utc>,
    pub query: String,
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceMeta>,
    pub feedback_type: FeedbackType,
    pub confidence: f64,
    #[serde(default)]
    pub judge_scores: JudgeScores,
    pub retrieval_method: String,
    pub web_search_triggered: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

impl FeedbackEntry {
    /// Materialize a submission into a persisted entry.
    ///
    /// `seq` is the 1-based position the entry will occupy in the log.
    pub fn assign(new: NewFeedback, seq: usize, now: DateTime<Utc>) -> Self {
        Self {
            feedback_id: format!("fb_{}_{}", seq, now.timestamp()),
            response_id: new.response_id,
            timestamp: now,
            query: new.query,
            answer: new.answer,
            sources: new.sources,
            feedback_type: new.feedback_type,
            confidence: new.confidence,
            judge_scores: new.judge_scores,
            retrieval_method: new.retrieval_method,
            web_search_triggered: new.web_search_triggered,
            comment: new.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_id_encodes_sequence_and_time() {
        let now = Utc::now();
        let new = NewFeedback {
            response_id: "resp_1".to_string(),
            query: "q".to_string(),
            answer: "a".to_string(),
            sources: vec![],
            feedback_type: FeedbackType::Positive,
            confidence: 0.8,
            judge_scores: JudgeScores::default(),
            retrieval_method: "hybrid".to_string(),
            web_search_triggered: false,
            comment: None,
        };
        let entry = FeedbackEntry::assign(new, 7, now);
        assert_eq!(entry.feedback_id, format!("fb_7_{}", now.timestamp()));
        assert_eq!(entry.timestamp, now);
    }

    #[test]
    fn missing_judge_scores_default_to_neutral_midpoint() {
        let json = r#"{
            "feedback_id": "fb_1_0",
            "response_id": "r",
            "timestamp": "2025-01-01T00:00:00Z",
            "query": "q",
            "answer": "a",
            "feedback_type": "negative",
            "confidence": 0.4,
            "retrieval_method": "hybrid",
            "web_search_triggered": true
        }"#;
        let entry: FeedbackEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.judge_scores.relevance, 5.0);
        assert_eq!(entry.judge_scores.factuality, 5.0);
        assert_eq!(entry.judge_scores.completeness, 5.0);
        assert!(entry.comment.is_none());
    }

    #[test]
    fn partial_judge_scores_fill_remaining_axes() {
        let json = r#"{"relevance": 8.0}"#;
        let scores: JudgeScores = serde_json::from_str(json).unwrap();
        assert_eq!(scores.relevance, 8.0);
        assert_eq!(scores.factuality, 5.0);
        assert_eq!(scores.completeness, 5.0);
    }

    #[test]
    fn feedback_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FeedbackType::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&FeedbackType::Negative).unwrap(),
            "\"negative\""
        );
    }
}
