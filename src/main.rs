use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use skillmatch::config::{LoggingSettings, Settings};
use skillmatch::core::Matcher;
use skillmatch::routes::{self, AppState};
use skillmatch::services::{AppwriteClient, AppwriteCollections, CacheManager, UserDirectory};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// LOG_LEVEL and LOG_FORMAT override the configured logging settings
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting SkillMatch matching service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let appwrite = AppwriteClient::new(
        settings.appwrite.endpoint,
        settings.appwrite.api_key,
        settings.appwrite.project_id,
        settings.appwrite.database_id,
        AppwriteCollections {
            user_profiles: settings.collection.user_profiles,
        },
    )
    .map_err(|e| {
        error!("Failed to create Appwrite client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Appwrite client initialized");

    // The service works without Redis, just without a shared cache tier
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let l1_cache_size = settings.cache.l1_cache_size.unwrap_or(1000);

    let cache = match settings.cache.redis_url.as_deref() {
        Some(redis_url) => match CacheManager::new(redis_url, l1_cache_size, cache_ttl).await {
            Ok(c) => {
                info!("Cache manager initialized with Redis (L1: {} entries, TTL: {}s)", l1_cache_size, cache_ttl);
                c
            }
            Err(e) => {
                error!("Failed to connect to Redis ({}), running with in-process cache only", e);
                CacheManager::in_memory(l1_cache_size, cache_ttl)
            }
        },
        None => {
            info!("Cache manager initialized (L1: {} entries, TTL: {}s)", l1_cache_size, cache_ttl);
            CacheManager::in_memory(l1_cache_size, cache_ttl)
        }
    };

    let matcher = Matcher::new(settings.matching.min_score);

    info!(
        "Matcher initialized (min score: {}, pool limit: {})",
        matcher.min_score(),
        settings.matching.candidate_pool_limit
    );

    let app_state = AppState {
        directory: UserDirectory::new(Arc::new(appwrite), Arc::new(cache)),
        matcher,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
