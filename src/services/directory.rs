use crate::models::UserProfile;
use crate::services::{AppwriteClient, AppwriteError, CacheKey, CacheManager};
use std::sync::Arc;

/// User lookups through the cache, falling back to Appwrite
///
/// Cache failures are logged and never fail a lookup.
#[derive(Clone)]
pub struct UserDirectory {
    appwrite: Arc<AppwriteClient>,
    cache: Arc<CacheManager>,
}

impl UserDirectory {
    pub fn new(appwrite: Arc<AppwriteClient>, cache: Arc<CacheManager>) -> Self {
        Self { appwrite, cache }
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Fetch the subject user's profile
    pub async fn profile(&self, user_id: &str) -> Result<UserProfile, AppwriteError> {
        let key = CacheKey::profile(user_id);
        if let Ok(profile) = self.cache.get::<UserProfile>(&key).await {
            return Ok(profile);
        }

        let profile = self.appwrite.get_profile(user_id).await?;
        if let Err(e) = self.cache.set(&key, &profile).await {
            tracing::warn!("Failed to cache profile {}: {}", user_id, e);
        }
        Ok(profile)
    }

    /// Fetch a bounded candidate pool for a subject
    pub async fn candidates(&self, user_id: &str, limit: usize) -> Result<Vec<UserProfile>, AppwriteError> {
        let key = CacheKey::candidates(user_id, limit);
        if let Ok(candidates) = self.cache.get::<Vec<UserProfile>>(&key).await {
            tracing::debug!("Using cached candidate pool for {}", user_id);
            return Ok(candidates);
        }

        let candidates = self.appwrite.list_candidates(user_id, limit).await?;
        if let Err(e) = self.cache.set(&key, &candidates).await {
            tracing::warn!("Failed to cache candidates for {}: {}", user_id, e);
        }
        Ok(candidates)
    }
}
