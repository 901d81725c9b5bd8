//! Process-level tracing setup for the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Level comes from RUST_LOG (default
/// "info"); set LOG_FORMAT=json for machine-readable output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_output = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_output {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}
