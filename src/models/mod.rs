// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, MatchResult, ScoreBreakdown};
pub use requests::{FindMatchesRequest, ComputeMatchesRequest, ExplainMatchRequest, MAX_INLINE_CANDIDATES};
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse};
