use serde::{Deserialize, Deserializer, Serialize};

/// Student profile as stored by the user directory
///
/// Only `id`, the two skill lists, `interests` and `department` take part in
/// scoring. The remaining fields are carried through for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "userId", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "skillsToShare", default, deserialize_with = "null_as_default")]
    pub skills_to_share: Vec<String>,
    #[serde(rename = "skillsToLearn", default, deserialize_with = "null_as_default")]
    pub skills_to_learn: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UserProfile {
    /// Minimal profile with an id and everything else empty
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Total number of skill tags the user has stated
    pub fn stated_skill_count(&self) -> usize {
        self.skills_to_learn.len() + self.skills_to_share.len()
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One scored candidate for a subject user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: UserProfile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "skillsTheyCanTeach")]
    pub skills_they_can_teach: Vec<String>,
    #[serde(rename = "skillsYouCanTeach")]
    pub skills_you_can_teach: Vec<String>,
}

/// How a compatibility score was put together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub max_possible_matches: u32,
    pub base_score: u32,
    pub interest_bonus: u8,
    pub department_bonus: u8,
    pub shared_interests: Vec<String>,
    pub compatibility_score: u8,
}
