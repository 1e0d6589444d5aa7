use crate::models::{UserProfile, MatchResult, ScoreBreakdown};
use crate::core::{
    filters::{same_department, shares_interest},
    skills::{merge_unique, overlap, shared_exact},
};

/// Bonus for at least one shared interest
pub const INTEREST_BONUS: u8 = 20;

/// Bonus for belonging to the same department
pub const DEPARTMENT_BONUS: u8 = 10;

/// Highest score a candidate can reach
pub const SCORE_CAP: u8 = 99;

/// Denominator for the skill score
///
/// Depends only on the subject, so every candidate in a pool is measured
/// against the same yardstick.
#[inline]
pub fn max_possible_matches(subject: &UserProfile) -> u32 {
    (subject.stated_skill_count() as u32).max(1)
}

/// Percentage of the subject's skill profile covered, rounded half up
///
/// Not capped: a candidate can match more tags than the subject stated when
/// skill lists contain repeats.
#[inline]
pub fn base_score(matching: usize, max_possible: u32) -> u32 {
    let max_possible = max_possible.max(1) as u64;
    let matching = matching as u64;

    ((200 * matching + max_possible) / (2 * max_possible)) as u32
}

/// Score a candidate against a subject
///
/// Scoring formula:
/// score = min(
///     round(100 * |matching skills| / max_possible_matches)
///     + 20 if any interest is shared
///     + 10 if the department is the same,
///     99
/// )
pub fn calculate_compatibility(
    subject: &UserProfile,
    candidate: &UserProfile,
) -> (MatchResult, ScoreBreakdown) {
    let skills_they_can_teach = overlap(&candidate.skills_to_share, &subject.skills_to_learn);
    let skills_you_can_teach = overlap(&subject.skills_to_share, &candidate.skills_to_learn);
    let matching_skills = merge_unique(&skills_they_can_teach, &skills_you_can_teach);

    let max_possible = max_possible_matches(subject);
    let base = base_score(matching_skills.len(), max_possible);

    let interest_bonus = if shares_interest(subject, candidate) { INTEREST_BONUS } else { 0 };
    let department_bonus = if same_department(subject, candidate) { DEPARTMENT_BONUS } else { 0 };

    let total = base + interest_bonus as u32 + department_bonus as u32;
    let compatibility_score = total.min(SCORE_CAP as u32) as u8;

    let breakdown = ScoreBreakdown {
        max_possible_matches: max_possible,
        base_score: base,
        interest_bonus,
        department_bonus,
        shared_interests: shared_exact(&subject.interests, &candidate.interests),
        compatibility_score,
    };

    let result = MatchResult {
        candidate: candidate.clone(),
        compatibility_score,
        matching_skills,
        skills_they_can_teach,
        skills_you_can_teach,
    };

    (result, breakdown)
}
