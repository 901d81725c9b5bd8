#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod gate;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use client::{MockBackend, RestBackend, ScoutBackend};
pub use config::backend::BackendConfig;
pub use error::AppError;
pub use extractors::session::ScoutSession;
pub use gate::{classify, GateOutcome, RouteClass};
pub use middleware::cors::cors_middleware;
pub use middleware::gatekeeper::Gatekeeper;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    frontend_test_support::logging::init();
}
