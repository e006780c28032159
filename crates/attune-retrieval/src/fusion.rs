//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines the semantic and keyword rankings into a single fused ranking
//! without requiring score normalization across retrieval methods. Output
//! magnitudes depend on `k` and are only meaningful relative to each other
//! within one query.

use std::collections::HashMap;

/// One entry of a source ranking list.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub doc_id: String,
    /// The source method's own score; ignored by fusion, which is rank-based.
    pub score: f64,
}

impl RankedResult {
    pub fn new(doc_id: impl Into<String>, score: f64) -> Self {
        Self {
            doc_id: doc_id.into(),
            score,
        }
    }
}

/// A candidate after RRF fusion, descending by `rrf_score`.
#[derive(Debug, Clone, PartialEq)]
pub struct FusedResult {
    pub doc_id: String,
    pub rrf_score: f64,
}

/// Fuse two ranked lists using Reciprocal Rank Fusion.
///
/// `k` is the smoothing constant (default 60). Higher k reduces the
/// influence of high-ranking items from any single list.
///
/// Ranks are 1-based positions within each list; a document absent from a
/// list contributes nothing from it. Ties in the fused score break by
/// first-encountered order, scanning the semantic list fully before the
/// keyword list. Empty inputs are valid and yield an empty result.
pub fn fuse(semantic: &[RankedResult], keyword: &[RankedResult], k: u32) -> Vec<FusedResult> {
    // (accumulated score, first-seen index) per document.
    let mut scores: HashMap<&str, (f64, usize)> = HashMap::new();
    let mut seen = 0usize;

    for list in [semantic, keyword] {
        for (rank, result) in list.iter().enumerate() {
            let rrf = 1.0 / (f64::from(k) + rank as f64 + 1.0);
            let entry = scores.entry(result.doc_id.as_str()).or_insert_with(|| {
                seen += 1;
                (0.0, seen)
            });
            entry.0 += rrf;
        }
    }

    let mut fused: Vec<(FusedResult, usize)> = scores
        .into_iter()
        .map(|(doc_id, (rrf_score, first_seen))| {
            (
                FusedResult {
                    doc_id: doc_id.to_string(),
                    rrf_score,
                },
                first_seen,
            )
        })
        .collect();

    // Descending by score; equal scores keep first-encountered order.
    fused.sort_by(|(a, a_seen), (b, b_seen)| {
        b.rrf_score
            .partial_cmp(&a.rrf_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a_seen.cmp(b_seen))
    });

    fused.into_iter().map(|(result, _)| result).collect()
}
