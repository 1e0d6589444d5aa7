// Route exports
pub mod matches;

use actix_web::web;

pub use matches::AppState;

/// Mount every route under the versioned API scope
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(matches::configure));
}
