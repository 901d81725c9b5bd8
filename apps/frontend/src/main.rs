use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use frontend::client::RestBackend;
use frontend::config::backend::BackendConfig;
use frontend::middleware::cors::cors_middleware;
use frontend::middleware::gatekeeper::Gatekeeper;
use frontend::middleware::request_trace::RequestTrace;
use frontend::middleware::structured_logger::StructuredLogger;
use frontend::routes;
use frontend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("FRONTEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("FRONTEND_PORT")
        .unwrap_or_else(|_| "3020".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ FRONTEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let config = match BackendConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let backend = match RestBackend::new(config) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("❌ Failed to build backend client: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting scouting frontend on http://{}:{}", host, port);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new(Arc::new(backend)));

    HttpServer::new(move || {
        App::new()
            .wrap(Gatekeeper)
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
