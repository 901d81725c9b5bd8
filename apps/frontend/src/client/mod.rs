//! The single seam to the remote scouting service.
//!
//! Everything the gateway knows about the outside world goes through
//! [`ScoutBackend`]: the authorization check, team allocation, and the
//! read-only lookups backing the page loaders. Handlers and middleware hold
//! the trait object, never a concrete client, so tests script the seam.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod mock;
pub mod rest;

pub use mock::MockBackend;
pub use rest::RestBackend;

/// Result of one remote authorization check. Valid only for the request
/// that produced it; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthDecision {
    pub authorized: bool,
}

/// A backend-issued pairing of the calling scout to a team, optionally
/// pinned to an alliance color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub team_key: String,
    pub color: Option<String>,
}

/// How a team-allocation attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// 200: a team was allocated for this scout.
    Assigned(TeamAssignment),
    /// 204: nothing to scout right now; wait for the next match.
    NoneAvailable,
    /// Any other status, authorization failure included.
    Denied,
}

/// One row of the scout roster: name and completion percentage.
/// Wire shape is an array of `[name, percent]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub name: String,
    pub percent: f64,
}

impl From<(String, f64)> for RosterEntry {
    fn from((name, percent): (String, f64)) -> Self {
        Self { name, percent }
    }
}

/// Errors from the seam itself, as opposed to unfavorable answers.
///
/// A 401 from `check` is an answer (`authorized: false`); a connection
/// refused or timeout is a `ClientError`. The gatekeeper treats the latter
/// as a denial, never as an allow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The call itself failed: connect error, timeout, TLS.
    Transport { endpoint: &'static str, detail: String },
    /// The call completed with a status the contract does not cover.
    Status { endpoint: &'static str, status: u16 },
    /// The body did not match the agreed wire shape.
    Decode { endpoint: &'static str, detail: String },
}

impl ClientError {
    pub fn transport(endpoint: &'static str, detail: impl Into<String>) -> Self {
        Self::Transport {
            endpoint,
            detail: detail.into(),
        }
    }

    pub fn status(endpoint: &'static str, status: u16) -> Self {
        Self::Status { endpoint, status }
    }

    pub fn decode(endpoint: &'static str, detail: impl Into<String>) -> Self {
        Self::Decode {
            endpoint,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { endpoint, detail } => {
                write!(f, "transport error calling {endpoint}: {detail}")
            }
            ClientError::Status { endpoint, status } => {
                write!(f, "unexpected status {status} from {endpoint}")
            }
            ClientError::Decode { endpoint, detail } => {
                write!(f, "failed to decode {endpoint} response: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// The remote scouting service, as the gateway sees it.
#[async_trait]
pub trait ScoutBackend: Send + Sync {
    /// POST /auth/check with the credential and whether admin privilege is
    /// required. Any non-200 answer means unauthorized.
    async fn check(&self, credential: &str, is_admin: bool) -> Result<AuthDecision, ClientError>;

    /// GET /scout/request_team, optionally constrained to one alliance
    /// color. At most one outstanding assignment per scout; the backend
    /// enforces that, not us.
    async fn request_team(
        &self,
        credential: &str,
        requested_color: Option<&str>,
    ) -> Result<AssignmentOutcome, ClientError>;

    /// GET /scout/get/current_match. Idempotent read; callers treat a
    /// failure as "no match known".
    async fn current_match(&self) -> Result<String, ClientError>;

    /// GET /admin/users/get/all. Idempotent read; failure is non-fatal.
    async fn roster(&self) -> Result<Vec<RosterEntry>, ClientError>;

    /// GET /scout/get/unpitted: teams still waiting for a pit visit.
    async fn unpitted(&self) -> Result<Vec<String>, ClientError>;
}
