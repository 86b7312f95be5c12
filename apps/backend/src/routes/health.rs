use actix_web::{web, HttpResponse};

use crate::error::AppError;

/// GET /health
///
/// Liveness probe. Deliberately store-independent: a backend with an
/// unreachable database still answers, since memory games keep working.
async fn health() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
