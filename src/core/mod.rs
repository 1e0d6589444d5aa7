// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use filters::{is_well_formed, is_self, shares_interest, same_department};
pub use matcher::{compute_matches, Matcher, MatchOutcome};
pub use scoring::{calculate_compatibility, max_possible_matches, base_score, INTEREST_BONUS, DEPARTMENT_BONUS, SCORE_CAP};
pub use skills::{overlap, merge_unique, shared_exact};
