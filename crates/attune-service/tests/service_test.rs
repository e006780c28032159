//! End-to-end tests of the feedback → optimizer loop, including the
//! concurrency guarantees around submission.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use attune_core::config::ConfigPatch;
use attune_core::feedback::FeedbackType;
use attune_service::TunerService;
use test_fixtures::{feedback, scored_feedback};

#[test]
fn concurrent_submissions_lose_nothing_and_trigger_once_per_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let service = Arc::new(TunerService::open(dir.path()).unwrap());
    service
        .config()
        .update(ConfigPatch {
            min_samples: Some(4),
            ..Default::default()
        })
        .unwrap();

    const SUBMITTERS: usize = 8;
    const PER_THREAD: usize = 3;

    let handles: Vec<_> = (0..SUBMITTERS)
        .map(|i| {
            let service = service.clone();
            thread::spawn(move || {
                let mut ids = Vec::new();
                for j in 0..PER_THREAD {
                    let t = if (i + j) % 2 == 0 {
                        FeedbackType::Positive
                    } else {
                        FeedbackType::Negative
                    };
                    ids.push(service.submit_feedback(feedback(t, false, 0.5)).unwrap());
                }
                ids
            })
        })
        .collect();

    let mut all_ids = Vec::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    // No lost writes, no duplicate ids.
    let total = SUBMITTERS * PER_THREAD;
    assert_eq!(all_ids.len(), total);
    let distinct: HashSet<&String> = all_ids.iter().collect();
    assert_eq!(distinct.len(), total);

    let stats = service.feedback_stats().unwrap();
    assert_eq!(stats.total, total);

    // Exactly one optimizer run per qualifying count: each run appends one
    // snapshot. 24 submissions at min_samples 4 → 6 runs.
    let history = service.config().snapshot().performance_history;
    assert_eq!(history.len(), total / 4);
    // Runs happened at the boundaries, over the accumulated log.
    assert!(history.iter().all(|s| s.total_feedback % 4 == 0));
}

#[test]
fn learning_loop_adapts_threshold_from_lived_feedback() {
    let dir = tempfile::tempdir().unwrap();
    let service = TunerService::open(dir.path()).unwrap();
    let initial = service
        .config()
        .snapshot()
        .web_search
        .confidence_threshold;

    // Ten entries: web-routed answers all positive, internal mostly negative.
    for i in 0..5 {
        service
            .submit_feedback(feedback(FeedbackType::Positive, true, 0.55 + i as f64 * 0.01))
            .unwrap();
    }
    for i in 0..5 {
        let t = if i == 0 {
            FeedbackType::Positive
        } else {
            FeedbackType::Negative
        };
        service.submit_feedback(feedback(t, false, 0.8)).unwrap();
    }

    let config = service.config().snapshot();
    assert!(
        config.web_search.confidence_threshold < initial,
        "threshold should move toward the better route"
    );
    assert!(config.web_search.confidence_threshold >= 0.5);

    // The adapted threshold changes live trigger decisions.
    let threshold = config.web_search.confidence_threshold;
    assert!(service.should_trigger_web_search(threshold - 0.01, 9.0));
    assert!(!service.should_trigger_web_search(threshold + 0.01, 9.0));
}

#[test]
fn state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let service = TunerService::open(dir.path()).unwrap();
        for _ in 0..5 {
            service
                .submit_feedback(scored_feedback(
                    FeedbackType::Negative,
                    false,
                    0.8,
                    attune_core::feedback::JudgeScores::new(4.0, 5.0, 4.0),
                ))
                .unwrap();
        }
    }

    // Reopen from the same directory: log, config version, and history hold.
    let service = TunerService::open(dir.path()).unwrap();
    let diagnostics = service.diagnostics().unwrap();
    assert_eq!(diagnostics.stats.total, 5);
    assert_eq!(diagnostics.config.performance_history.len(), 1);
    assert!(diagnostics.config.version > 1);

    // Appends continue the id sequence.
    let id = service
        .submit_feedback(feedback(FeedbackType::Positive, false, 0.9))
        .unwrap();
    assert!(id.starts_with("fb_6_"));
}
