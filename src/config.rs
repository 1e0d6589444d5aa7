use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub appwrite: AppwriteSettings,
    pub collection: CollectionSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppwriteSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    pub user_profiles: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// L2 cache; when unset only the in-process cache is used
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    /// Number of candidates fetched from the directory per request
    #[serde(default = "default_candidate_pool_limit")]
    pub candidate_pool_limit: usize,
    #[serde(default)]
    pub min_score: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            candidate_pool_limit: default_candidate_pool_limit(),
            min_score: 0,
        }
    }
}

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and ceiling
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit) as usize
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_candidate_pool_limit() -> usize { 500 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SKILLMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILLMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SKILLMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SKILLMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the plain Appwrite variables used by the rest of the platform
///
/// `APPWRITE_ENDPOINT`, `APPWRITE_API_KEY`, `APPWRITE_PROJECT_ID`,
/// `APPWRITE_DATABASE_ID` and `APPWRITE_USERS_COLLECTION` win over file values.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("APPWRITE_ENDPOINT", "appwrite.endpoint"),
        ("APPWRITE_API_KEY", "appwrite.api_key"),
        ("APPWRITE_PROJECT_ID", "appwrite.project_id"),
        ("APPWRITE_DATABASE_ID", "appwrite.database_id"),
        ("APPWRITE_USERS_COLLECTION", "collection.user_profiles"),
        ("REDIS_URL", "cache.redis_url"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_limit, 20);
        assert_eq!(matching.max_limit, 100);
        assert_eq!(matching.candidate_pool_limit, 500);
        assert_eq!(matching.min_score, 0);
    }

    #[test]
    fn test_effective_limit() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.effective_limit(None), 20);
        assert_eq!(matching.effective_limit(Some(5)), 5);
        assert_eq!(matching.effective_limit(Some(1000)), 100);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("skillmatch_settings_test.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[appwrite]
endpoint = "https://appwrite.test/v1"
api_key = "key"
project_id = "project"
database_id = "db"

[collection]
user_profiles = "users"

[matching]
max_limit = 50
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.collection.user_profiles, "users");
        assert_eq!(settings.matching.max_limit, 50);
        assert_eq!(settings.matching.default_limit, 20);
        assert!(settings.cache.redis_url.is_none());
        assert_eq!(settings.logging.format, "json");
    }
}
