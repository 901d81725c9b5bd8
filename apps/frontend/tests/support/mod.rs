//! Shared harness for the integration suites.

pub mod app_builder;

pub use app_builder::spawn_app;

// Auto-initialize logging for every integration test binary
#[ctor::ctor]
fn init_test_logging() {
    frontend_test_support::logging::init();
}
