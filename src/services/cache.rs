use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// Two-tier cache for directory lookups
///
/// L1 is an in-process moka cache. L2 is Redis, shared across instances, and
/// only present when a Redis URL is configured.
pub struct CacheManager {
    redis: Option<Arc<tokio::sync::Mutex<ConnectionManager>>>,
    l1_cache: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Create a cache manager backed by L1 and Redis
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        let mut cache = Self::in_memory(l1_size, ttl_secs);
        cache.redis = Some(Arc::new(tokio::sync::Mutex::new(redis)));
        Ok(cache)
    }

    /// Create a cache manager with only the in-process tier
    pub fn in_memory(l1_size: u64, ttl_secs: u64) -> Self {
        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            redis: None,
            l1_cache,
            ttl_secs,
        }
    }

    pub fn has_shared_tier(&self) -> bool {
        self.redis.is_some()
    }

    /// Get a value from cache (L1 first, then L2)
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.l1_cache.get(key).await {
            tracing::trace!("L1 cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        if let Some(shared) = &self.redis {
            let mut conn = shared.lock().await;
            let value: Option<String> = redis::cmd("GET")
                .arg(key)
                .query_async(&mut *conn)
                .await?;
            drop(conn);

            if let Some(json) = value {
                tracing::trace!("L2 cache hit: {}", key);
                let parsed = serde_json::from_str(&json)?;
                self.l1_cache.insert(key.to_string(), json.into_bytes()).await;
                return Ok(parsed);
            }
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in every configured tier
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;

        self.l1_cache.insert(key.to_string(), json.as_bytes().to_vec()).await;

        if let Some(shared) = &self.redis {
            let mut conn = shared.lock().await;
            redis::cmd("SETEX")
                .arg(key)
                .arg(self.ttl_secs)
                .arg(json)
                .query_async::<()>(&mut *conn)
                .await?;
        }

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Delete a value from every configured tier
    pub async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.l1_cache.invalidate(key).await;

        if let Some(shared) = &self.redis {
            let mut conn = shared.lock().await;
            redis::cmd("DEL")
                .arg(key)
                .query_async::<()>(&mut *conn)
                .await?;
        }
        Ok(())
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            l1_size: self.l1_cache.entry_count(),
            shared_tier: self.has_shared_tier(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub l1_size: u64,
    pub shared_tier: bool,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a user profile
    pub fn profile(user_id: &str) -> String {
        format!("profile:{}", user_id)
    }

    /// Build a cache key for a candidate pool
    pub fn candidates(user_id: &str, limit: usize) -> String {
        format!("candidates:{}:{}", user_id, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    #[tokio::test]
    async fn test_in_memory_set_get_delete() {
        let cache = CacheManager::in_memory(100, 60);
        let key = CacheKey::profile("u1");
        let profile = UserProfile {
            department: "CS".to_string(),
            ..UserProfile::new("u1")
        };

        cache.set(&key, &profile).await.unwrap();
        let cached: UserProfile = cache.get(&key).await.unwrap();
        assert_eq!(cached, profile);

        cache.delete(&key).await.unwrap();
        assert!(matches!(
            cache.get::<UserProfile>(&key).await,
            Err(CacheError::CacheMiss(_))
        ));
        assert!(!cache.has_shared_tier());
    }

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_redis_set_get() {
        let cache = CacheManager::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create cache");

        let key = "test_key";
        cache.set(key, &"test_value").await.unwrap();
        let result: String = cache.get(key).await.unwrap();
        assert_eq!(result, "test_value");

        cache.delete(key).await.unwrap();
        assert!(cache.get::<String>(key).await.is_err());
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::profile("user123"), "profile:user123");
        assert_eq!(CacheKey::candidates("user123", 500), "candidates:user123:500");
    }
}
