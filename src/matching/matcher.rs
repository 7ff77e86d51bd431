//! Name matching across the timecard and break sheet.
//!
//! A candidate timecard name is scored against every break-sheet name using
//! an order-independent similarity over the normalized token forms, and the
//! best pool entry is returned only when its score clears the caller's
//! threshold.

use serde::{Deserialize, Serialize};

use super::normalize::normalize_name;

/// The outcome of matching one candidate name against a pool.
///
/// `score` is the best similarity seen (0-100) even when no entry cleared
/// the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    /// The original (pre-normalization) pool entry that matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    /// The best similarity score seen against the pool (0-100).
    pub score: u32,
}

/// Scores two display names on a 0-100 scale.
///
/// Both names are reduced to their sorted-token normal form first, so the
/// metric is invariant to word order and comma placement.
pub fn similarity(a: &str, b: &str) -> u32 {
    let score = strsim::normalized_levenshtein(&normalize_name(a), &normalize_name(b));
    (score * 100.0).round() as u32
}

/// Matches a candidate name against a pool of break-sheet names.
///
/// Every pool entry is scored with [`similarity`]; the maximum wins, with
/// ties resolved by first-encountered pool order (the pool is never
/// re-sorted). The matched entry is returned as its original string only
/// when the best score is at least `threshold`; otherwise `matched` is
/// `None` and `score` still reports the best seen.
///
/// # Example
///
/// ```
/// use break_audit::matching::match_one;
///
/// let pool = ["Smith, Jan", "Acosta, Geovanny"];
/// let result = match_one("Geovanny Acosta", &pool, 80);
/// assert_eq!(result.matched.as_deref(), Some("Acosta, Geovanny"));
/// assert_eq!(result.score, 100);
/// ```
pub fn match_one(candidate: &str, pool: &[&str], threshold: u32) -> NameMatch {
    let normalized_candidate = normalize_name(candidate);

    let mut best_score: u32 = 0;
    let mut best_index: Option<usize> = None;

    for (index, entry) in pool.iter().enumerate() {
        let score = (strsim::normalized_levenshtein(&normalized_candidate, &normalize_name(entry))
            * 100.0)
            .round() as u32;
        // Strict improvement only, so the first-encountered entry wins ties.
        if best_index.is_none() || score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    let matched = best_index
        .filter(|_| best_score >= threshold)
        .map(|index| pool[index].to_string());

    NameMatch {
        matched,
        score: best_score,
    }
}
