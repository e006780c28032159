//! # attune-core
//!
//! Foundation crate for the Attune adaptive-retrieval tuner.
//! Defines feedback types, the tuning configuration, models, errors, and
//! constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod feedback;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{ConfigPatch, TuningConfig};
pub use errors::{AttuneError, AttuneResult};
pub use feedback::{FeedbackEntry, FeedbackType, JudgeScores, NewFeedback};
