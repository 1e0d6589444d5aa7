use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    ComputeMatchesRequest, ErrorResponse, ExplainMatchRequest, FindMatchesRequest,
    FindMatchesResponse, HealthResponse,
};
use crate::services::{AppwriteError, UserDirectory};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: UserDirectory,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/compute", web::post().to(compute_matches))
        .route("/matches/explain", web::post().to(explain_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let stats = state.directory.cache().stats();
    tracing::trace!("Health check, L1 cache entries: {}", stats.l1_size);

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new("Validation failed", errors.to_string(), 400))
}

fn upstream_failed(context: &str, err: AppwriteError) -> HttpResponse {
    match err {
        AppwriteError::NotFound(message) => {
            HttpResponse::NotFound().json(ErrorResponse::new("Not found", message, 404))
        }
        err => HttpResponse::BadGateway().json(ErrorResponse::new(context, err.to_string(), 502)),
    }
}

/// Find matches for a stored user
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return validation_failed(errors);
    }

    let user_id = &req.user_id;
    let limit = state.matching.effective_limit(req.limit);

    tracing::info!("Finding matches for user: {}, limit: {}", user_id, limit);

    let subject = match state.directory.profile(user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return upstream_failed("Failed to fetch user profile", e);
        }
    };

    let candidates = match state
        .directory
        .candidates(user_id, state.matching.candidate_pool_limit)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to fetch candidates for {}: {}", user_id, e);
            return upstream_failed("Failed to fetch candidates", e);
        }
    };

    tracing::debug!("Found {} candidates for {}", candidates.len(), user_id);

    let result = state.matcher.find_matches(&subject, candidates, limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates, {} skipped)",
        result.matches.len(),
        user_id,
        result.total_candidates,
        result.skipped
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        skipped: result.skipped,
    })
}

/// Score an inline candidate pool
///
/// POST /api/v1/matches/compute
///
/// Request body:
/// ```json
/// {
///   "subject": { "id": "string", "skillsToLearn": ["string"] },
///   "candidates": [{ "id": "string", "skillsToShare": ["string"] }],
///   "limit": 20
/// }
/// ```
async fn compute_matches(
    state: web::Data<AppState>,
    req: web::Json<ComputeMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    if req.candidates.len() > state.matching.candidate_pool_limit {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Candidate pool too large",
            format!(
                "At most {} candidates may be scored per request",
                state.matching.candidate_pool_limit
            ),
            400,
        ));
    }

    let limit = state.matching.effective_limit(req.limit);
    let ComputeMatchesRequest { subject, candidates, .. } = req.into_inner();

    let result = state.matcher.find_matches(&subject, candidates, limit);

    tracing::info!(
        "Computed {} matches for {} (from {} candidates)",
        result.matches.len(),
        subject.id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        skipped: result.skipped,
    })
}

/// Explain the score of a single pairing
///
/// POST /api/v1/matches/explain
async fn explain_match(
    state: web::Data<AppState>,
    req: web::Json<ExplainMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.matcher.explain(&req.subject, &req.candidate) {
        Some(breakdown) => HttpResponse::Ok().json(breakdown),
        None => HttpResponse::UnprocessableEntity().json(ErrorResponse::new(
            "Invalid pairing",
            "Pairing is self or malformed",
            422,
        )),
    }
}
