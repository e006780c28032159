//! Shared builders for feedback records used in tests across crates.

use chrono::Utc;

use attune_core::feedback::{FeedbackEntry, FeedbackType, JudgeScores, NewFeedback};

/// A submission with the fields the tuning loop actually reads; the textual
/// context is filler.
pub fn feedback(
    feedback_type: FeedbackType,
    web_search_triggered: bool,
    confidence: f64,
) -> NewFeedback {
    NewFeedback {
        response_id: "resp_test".to_string(),
        query: "test query".to_string(),
        answer: "test answer".to_string(),
        sources: vec![],
        feedback_type,
        confidence,
        judge_scores: JudgeScores::default(),
        retrieval_method: "hybrid".to_string(),
        web_search_triggered,
        comment: None,
    }
}

/// Same as [`feedback`] with explicit judge scores.
pub fn scored_feedback(
    feedback_type: FeedbackType,
    web_search_triggered: bool,
    confidence: f64,
    judge_scores: JudgeScores,
) -> NewFeedback {
    NewFeedback {
        judge_scores,
        ..feedback(feedback_type, web_search_triggered, confidence)
    }
}

/// A fully materialized log entry, for code that consumes `FeedbackEntry`
/// slices directly (stats, optimizer analyses).
pub fn entry(
    seq: usize,
    feedback_type: FeedbackType,
    web_search_triggered: bool,
    confidence: f64,
) -> FeedbackEntry {
    FeedbackEntry::assign(feedback(feedback_type, web_search_triggered, confidence), seq, Utc::now())
}

/// A materialized entry with explicit judge scores.
pub fn scored_entry(
    seq: usize,
    feedback_type: FeedbackType,
    web_search_triggered: bool,
    confidence: f64,
    judge_scores: JudgeScores,
) -> FeedbackEntry {
    FeedbackEntry::assign(
        scored_feedback(feedback_type, web_search_triggered, confidence, judge_scores),
        seq,
        Utc::now(),
    )
}
