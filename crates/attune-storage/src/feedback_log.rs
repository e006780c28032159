//! Append-only persisted log of feedback entries.
//!
//! The single mutation point is `append`, which holds one mutex across
//! read-length / assign-id / push / persist, so concurrent submissions can
//! neither lose entries nor produce duplicate ids. The log grows for the
//! process lifetime and is never compacted.

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, info, warn};

use attune_core::feedback::{FeedbackEntry, FeedbackType, NewFeedback};
use attune_core::{AttuneError, AttuneResult};

use crate::stats::FeedbackStats;
use crate::{ensure_parent_dir, persist_json};

pub struct FeedbackLog {
    path: PathBuf,
    entries: Mutex<Vec<FeedbackEntry>>,
}

impl FeedbackLog {
    /// Open the log at `path`, loading any persisted entries.
    ///
    /// A missing file starts an empty log; an unreadable or corrupt file is
    /// logged and also starts empty, accepting loss of history over refusing
    /// to start.
    pub fn open(path: impl Into<PathBuf>) -> AttuneResult<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<FeedbackEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt feedback log, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable feedback log, starting empty");
                Vec::new()
            }
        };

        info!(path = %path.display(), entries = entries.len(), "feedback log opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Append a new entry, assigning its id from the sequence position and
    /// creation time. Returns the id and the log length after the append.
    pub fn append(&self, new: NewFeedback) -> AttuneResult<(String, usize)> {
        if !(0.0..=1.0).contains(&new.confidence) {
            return Err(AttuneError::InvalidFeedback {
                message: format!("confidence {} outside [0, 1]", new.confidence),
            });
        }

        let mut entries = self.lock()?;
        let seq = entries.len() + 1;
        let entry = FeedbackEntry::assign(new, seq, Utc::now());
        let id = entry.feedback_id.clone();

        entries.push(entry);
        if let Err(e) = persist_json(&self.path, &*entries) {
            // Roll back so a failed submission leaves no trace: otherwise a
            // retry would record the feedback twice once persistence heals.
            entries.pop();
            return Err(e);
        }

        debug!(feedback_id = %id, total = entries.len(), "feedback appended");
        Ok((id, entries.len()))
    }

    /// All entries in append order.
    pub fn load_all(&self) -> AttuneResult<Vec<FeedbackEntry>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> AttuneResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> AttuneResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Aggregate counts with the route and confidence-band breakdowns.
    pub fn stats(&self) -> AttuneResult<FeedbackStats> {
        Ok(FeedbackStats::compute(&self.lock()?))
    }

    /// The most recent negative entries, newest first. Feeds review of
    /// failed queries.
    pub fn recent_negative(&self, limit: usize) -> AttuneResult<Vec<FeedbackEntry>> {
        let entries = self.lock()?;
        Ok(entries
            .iter()
            .rev()
            .filter(|e| e.feedback_type == FeedbackType::Negative)
            .take(limit)
            .cloned()
            .collect())
    }

    fn lock(&self) -> AttuneResult<std::sync::MutexGuard<'_, Vec<FeedbackEntry>>> {
        self.entries.lock().map_err(|_| AttuneError::LockPoisoned {
            resource: "feedback log",
        })
    }
}
