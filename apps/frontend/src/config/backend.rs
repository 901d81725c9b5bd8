use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the scouting backend lives and how long we wait for it.
///
/// Read from the environment exactly once at process start and validated
/// there; everything downstream receives this struct, never env vars.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the scouting backend, no trailing slash.
    pub base_url: String,
    /// Per-request timeout for every outbound call.
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let base_url = validate_base_url(base_url.into())?;
        Ok(Self { base_url, timeout })
    }

    /// Build the configuration from `BACKEND_BASE_URL` (required) and
    /// `BACKEND_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = must_var("BACKEND_BASE_URL")?;
        let timeout = timeout_from_env()?;
        Self::new(base_url, timeout)
    }
}

fn validate_base_url(raw: String) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::config(format!(
            "BACKEND_BASE_URL must be an http(s) URL, got: '{raw}'"
        )));
    }
    if trimmed.len() <= "https://".len() {
        return Err(AppError::config(
            "BACKEND_BASE_URL is missing a host".to_string(),
        ));
    }
    Ok(trimmed)
}

fn timeout_from_env() -> Result<Duration, AppError> {
    match env::var("BACKEND_TIMEOUT_SECS") {
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Ok(raw) => {
            let secs: u64 = raw.parse().map_err(|_| {
                AppError::config(format!(
                    "BACKEND_TIMEOUT_SECS must be a positive integer, got: '{raw}'"
                ))
            })?;
            if secs == 0 {
                return Err(AppError::config(
                    "BACKEND_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            Ok(Duration::from_secs(secs))
        }
    }
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::config(format!("{name} must be set")))
}
