//! The request-authorization gate.
//!
//! Every inbound request is classified by path and resolved to one typed
//! [`GateOutcome`] before any handler runs. The decision logic lives here,
//! free of actix types, so it can be exercised directly against a scripted
//! backend; `middleware::gatekeeper` only interprets the outcome.

use tracing::{info, warn};

use crate::client::{AuthDecision, ScoutBackend};
use crate::error::AppError;

pub mod route_class;

pub use route_class::{classify, RouteClass, ADMIN_PREFIX, LANDING_ROUTE, PROTECTED_PREFIX, PUBLIC_ENTRY};

/// What the serving layer should do with the request.
#[derive(Debug)]
pub enum GateOutcome {
    /// Let the request reach its handler.
    Allow,
    /// Send the client elsewhere (303) instead of serving this path.
    Redirect(String),
    /// Refuse the request with this error.
    Reject(AppError),
}

impl GateOutcome {
    fn label(&self) -> &'static str {
        match self {
            GateOutcome::Allow => "allow",
            GateOutcome::Redirect(_) => "redirect",
            GateOutcome::Reject(_) => "reject",
        }
    }
}

/// Resolve one request to an outcome.
///
/// Protected and admin-protected paths require a credential and one
/// successful remote check; the admin flag follows the route class. A
/// failed check call denies. The public entry redirects scouts who are
/// already authorized to the landing route; the check there is attempted
/// only when a credential is present, and any failure just serves the
/// public page.
pub async fn evaluate(
    backend: &dyn ScoutBackend,
    path: &str,
    credential: Option<&str>,
) -> GateOutcome {
    let class = classify(path);
    let outcome = match class {
        RouteClass::Public => public_entry_outcome(backend, path, credential).await,
        RouteClass::Protected | RouteClass::AdminProtected => {
            protected_outcome(backend, class, credential).await
        }
    };

    info!(
        path = %path,
        class = ?class,
        outcome = outcome.label(),
        "gate_decision"
    );
    outcome
}

async fn protected_outcome(
    backend: &dyn ScoutBackend,
    class: RouteClass,
    credential: Option<&str>,
) -> GateOutcome {
    let Some(credential) = credential else {
        return GateOutcome::Reject(AppError::unauthenticated());
    };

    match backend.check(credential, class.requires_admin()).await {
        Ok(AuthDecision { authorized: true }) => GateOutcome::Allow,
        Ok(AuthDecision { authorized: false }) => GateOutcome::Reject(AppError::unauthorized()),
        Err(err) => {
            // Fail closed: an unreachable auth service never lets anyone in.
            warn!(error = %err, "authorization check failed, denying request");
            GateOutcome::Reject(AppError::unauthorized())
        }
    }
}

async fn public_entry_outcome(
    backend: &dyn ScoutBackend,
    path: &str,
    credential: Option<&str>,
) -> GateOutcome {
    if path != PUBLIC_ENTRY {
        return GateOutcome::Allow;
    }
    let Some(credential) = credential else {
        return GateOutcome::Allow;
    };

    match backend.check(credential, false).await {
        Ok(AuthDecision { authorized: true }) => {
            GateOutcome::Redirect(LANDING_ROUTE.to_string())
        }
        Ok(AuthDecision { authorized: false }) => GateOutcome::Allow,
        Err(err) => {
            warn!(error = %err, "landing check failed, serving public page");
            GateOutcome::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use crate::client::mock::RecordedCall;
    use crate::client::{ClientError, MockBackend};

    use super::*;

    fn reject_status(outcome: &GateOutcome) -> Option<StatusCode> {
        match outcome {
            GateOutcome::Reject(err) => Some(err.status()),
            _ => None,
        }
    }

    #[tokio::test]
    async fn public_path_allows_without_credential() {
        let backend = MockBackend::new();
        let outcome = evaluate(&backend, "/health", None).await;
        assert!(matches!(outcome, GateOutcome::Allow));
        assert!(backend.recorded().is_empty());
    }

    #[tokio::test]
    async fn protected_path_without_credential_is_rejected() {
        let backend = MockBackend::new();
        let outcome = evaluate(&backend, "/app/home", None).await;
        assert_eq!(reject_status(&outcome), Some(StatusCode::UNAUTHORIZED));
        assert!(backend.recorded().is_empty());
    }

    #[tokio::test]
    async fn protected_path_with_valid_credential_is_allowed() {
        let backend = MockBackend::new();
        let outcome = evaluate(&backend, "/app/scout", Some("tok-1")).await;
        assert!(matches!(outcome, GateOutcome::Allow));
        assert_eq!(
            backend.recorded(),
            vec![RecordedCall::Check {
                credential: "tok-1".to_string(),
                is_admin: false,
            }]
        );
    }

    #[tokio::test]
    async fn admin_path_checks_with_admin_flag() {
        let backend = MockBackend::new();
        evaluate(&backend, "/app/admin/users", Some("tok-2")).await;
        assert_eq!(
            backend.recorded(),
            vec![RecordedCall::Check {
                credential: "tok-2".to_string(),
                is_admin: true,
            }]
        );
    }

    #[tokio::test]
    async fn rejected_credential_is_rejected() {
        let backend =
            MockBackend::new().with_check(Ok(AuthDecision { authorized: false }));
        let outcome = evaluate(&backend, "/app/home", Some("bad")).await;
        assert_eq!(reject_status(&outcome), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn check_transport_error_fails_closed() {
        let backend = MockBackend::new()
            .with_check(Err(ClientError::transport("/auth/check", "connection refused")));
        let outcome = evaluate(&backend, "/app/home", Some("tok-3")).await;
        assert_eq!(reject_status(&outcome), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn authorized_credential_on_root_redirects_to_landing() {
        let backend = MockBackend::new();
        let outcome = evaluate(&backend, "/", Some("tok-4")).await;
        match outcome {
            GateOutcome::Redirect(location) => assert_eq!(location, LANDING_ROUTE),
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn root_without_credential_serves_public_page_without_check() {
        let backend = MockBackend::new();
        let outcome = evaluate(&backend, "/", None).await;
        assert!(matches!(outcome, GateOutcome::Allow));
        assert!(backend.recorded().is_empty());
    }

    #[tokio::test]
    async fn root_check_failure_still_serves_public_page() {
        let backend = MockBackend::new()
            .with_check(Err(ClientError::transport("/auth/check", "timed out")));
        let outcome = evaluate(&backend, "/", Some("tok-5")).await;
        assert!(matches!(outcome, GateOutcome::Allow));
    }
}
