use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// `main.rs` and the HTTP tests both register through here, so tests
/// exercise exactly the production paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
