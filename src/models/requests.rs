use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::UserProfile;

/// Largest inline candidate list accepted by the compute endpoint
pub const MAX_INLINE_CANDIDATES: usize = 1000;

/// Request to find matches for a stored user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score an inline candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComputeMatchesRequest {
    #[validate(custom(function = "validate_profile_id"))]
    pub subject: UserProfile,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub candidates: Vec<UserProfile>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to explain the score of a single pairing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExplainMatchRequest {
    #[validate(custom(function = "validate_profile_id"))]
    pub subject: UserProfile,
    #[validate(custom(function = "validate_profile_id"))]
    pub candidate: UserProfile,
}

fn validate_profile_id(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.id.trim().is_empty() {
        return Err(ValidationError::new("missing_id"));
    }
    Ok(())
}
