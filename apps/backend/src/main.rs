use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::store::store_kind;
use backend::infra::state::build_store;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Grovetown Backend on http://{}:{}", host, port);

    let kind = match store_kind() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("❌ Invalid store configuration: {e}");
            std::process::exit(1);
        }
    };

    let store = match build_store(kind, DbProfile::Prod).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to build game store: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Game store ready ({kind})");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new(store));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
