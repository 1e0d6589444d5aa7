//! SkillMatch - skill-based matchmaking for the campus skill-sharing platform
//!
//! The core of this crate is a pure compatibility-scoring engine that ranks
//! candidate users for a subject by complementary skills, shared interests
//! and department. The rest wraps it in an HTTP service backed by the
//! Appwrite user directory.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{compute_matches, Matcher, MatchOutcome};
pub use models::{UserProfile, MatchResult, ScoreBreakdown, FindMatchesRequest, FindMatchesResponse};
