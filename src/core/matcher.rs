use std::cmp::Ordering;
use crate::models::{UserProfile, MatchResult, ScoreBreakdown};
use crate::core::{
    filters::{is_self, is_well_formed},
    scoring::calculate_compatibility,
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    pub skipped: usize,
}

/// Rank a candidate pool for one subject
///
/// The subject is never part of the output and candidates without an id are
/// dropped. Results are ordered by score descending, then candidate id
/// ascending; equal ids keep their pool order.
pub fn compute_matches(subject: &UserProfile, candidates: &[UserProfile]) -> Vec<MatchResult> {
    rank(subject, candidates).0
}

fn rank(subject: &UserProfile, candidates: &[UserProfile]) -> (Vec<MatchResult>, usize) {
    if !is_well_formed(subject) {
        tracing::warn!("Subject profile has no id, skipping {} candidates", candidates.len());
        return (Vec::new(), 0);
    }

    let mut skipped = 0;
    let mut results: Vec<MatchResult> = candidates
        .iter()
        .filter(|candidate| {
            if is_well_formed(candidate) {
                true
            } else {
                skipped += 1;
                false
            }
        })
        .filter(|candidate| !is_self(subject, candidate))
        .map(|candidate| calculate_compatibility(subject, candidate).0)
        .collect();

    if skipped > 0 {
        tracing::debug!("Skipped {} malformed candidates for {}", skipped, subject.id);
    }

    // Stable sort, so duplicate ids stay in pool order
    results.sort_by(compare_results);

    (results, skipped)
}

fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.compatibility_score
        .cmp(&a.compatibility_score)
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}

/// Main matching orchestrator
///
/// Wraps [`compute_matches`] with a minimum score and a result limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    min_score: u8,
}

impl Matcher {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Find the best `limit` matches for a subject
    ///
    /// # Arguments
    /// * `subject` - The user matches are computed for
    /// * `candidates` - The candidate pool, which may contain the subject
    /// * `limit` - Maximum number of matches to return
    pub fn find_matches(
        &self,
        subject: &UserProfile,
        candidates: Vec<UserProfile>,
        limit: usize,
    ) -> MatchOutcome {
        let total_candidates = candidates.len();
        let (mut matches, skipped) = rank(subject, &candidates);

        if self.min_score > 0 {
            matches.retain(|m| m.compatibility_score >= self.min_score);
        }
        matches.truncate(limit);

        MatchOutcome {
            matches,
            total_candidates,
            skipped,
        }
    }

    /// Score breakdown for a single pairing
    ///
    /// Returns `None` when either profile has no id or both are the same user.
    pub fn explain(&self, subject: &UserProfile, candidate: &UserProfile) -> Option<ScoreBreakdown> {
        if !is_well_formed(subject) || !is_well_formed(candidate) || is_self(subject, candidate) {
            return None;
        }
        Some(calculate_compatibility(subject, candidate).1)
    }
}
