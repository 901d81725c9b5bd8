//! reqwest implementation of the scouting-backend seam.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::backend::BackendConfig;
use crate::error::AppError;

use super::{AssignmentOutcome, AuthDecision, ClientError, RosterEntry, ScoutBackend, TeamAssignment};

const AUTH_CHECK: &str = "/auth/check";
const REQUEST_TEAM: &str = "/scout/request_team";
const CURRENT_MATCH: &str = "/scout/get/current_match";
const ROSTER: &str = "/admin/users/get/all";
const UNPITTED: &str = "/scout/get/unpitted";

/// Headers the backend expects on authenticated scout calls.
const ACCESS_TOKEN_HEADER: &str = "x-access-token";
const REQUESTED_COLOR_HEADER: &str = "requested_color";

pub struct RestBackend {
    http: reqwest::Client,
    config: BackendConfig,
}

impl RestBackend {
    /// Build a client with the configured per-request timeout. The timeout
    /// bounds every outbound call; a timed-out check denies, it does not
    /// hang the request.
    pub fn new(config: BackendConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

#[derive(Serialize)]
struct CheckRequest<'a> {
    access_token: &'a str,
    is_admin: bool,
}

#[derive(Deserialize)]
struct AssignmentWire {
    team_key: String,
    color: Option<String>,
}

#[async_trait]
impl ScoutBackend for RestBackend {
    async fn check(&self, credential: &str, is_admin: bool) -> Result<AuthDecision, ClientError> {
        let body = CheckRequest {
            access_token: credential,
            is_admin,
        };
        let res = self
            .http
            .post(self.url(AUTH_CHECK))
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::transport(AUTH_CHECK, e.to_string()))?;

        Ok(AuthDecision {
            authorized: res.status() == StatusCode::OK,
        })
    }

    async fn request_team(
        &self,
        credential: &str,
        requested_color: Option<&str>,
    ) -> Result<AssignmentOutcome, ClientError> {
        let mut req = self
            .http
            .get(self.url(REQUEST_TEAM))
            .header(ACCESS_TOKEN_HEADER, credential);
        if let Some(color) = requested_color {
            req = req.header(REQUESTED_COLOR_HEADER, color);
        }

        let res = req
            .send()
            .await
            .map_err(|e| ClientError::transport(REQUEST_TEAM, e.to_string()))?;

        match res.status() {
            StatusCode::OK => {
                let wire: AssignmentWire = res
                    .json()
                    .await
                    .map_err(|e| ClientError::decode(REQUEST_TEAM, e.to_string()))?;
                Ok(AssignmentOutcome::Assigned(TeamAssignment {
                    team_key: wire.team_key,
                    color: wire.color,
                }))
            }
            StatusCode::NO_CONTENT => Ok(AssignmentOutcome::NoneAvailable),
            _ => Ok(AssignmentOutcome::Denied),
        }
    }

    async fn current_match(&self) -> Result<String, ClientError> {
        let res = self
            .http
            .get(self.url(CURRENT_MATCH))
            .send()
            .await
            .map_err(|e| ClientError::transport(CURRENT_MATCH, e.to_string()))?;

        if res.status() != StatusCode::OK {
            return Err(ClientError::status(CURRENT_MATCH, res.status().as_u16()));
        }

        res.json::<String>()
            .await
            .map_err(|e| ClientError::decode(CURRENT_MATCH, e.to_string()))
    }

    async fn roster(&self) -> Result<Vec<RosterEntry>, ClientError> {
        let res = self
            .http
            .get(self.url(ROSTER))
            .send()
            .await
            .map_err(|e| ClientError::transport(ROSTER, e.to_string()))?;

        if res.status() != StatusCode::OK {
            return Err(ClientError::status(ROSTER, res.status().as_u16()));
        }

        let pairs: Vec<(String, f64)> = res
            .json()
            .await
            .map_err(|e| ClientError::decode(ROSTER, e.to_string()))?;
        Ok(pairs.into_iter().map(RosterEntry::from).collect())
    }

    async fn unpitted(&self) -> Result<Vec<String>, ClientError> {
        let res = self
            .http
            .get(self.url(UNPITTED))
            .send()
            .await
            .map_err(|e| ClientError::transport(UNPITTED, e.to_string()))?;

        if res.status() != StatusCode::OK {
            return Err(ClientError::status(UNPITTED, res.status().as_u16()));
        }

        res.json::<Vec<String>>()
            .await
            .map_err(|e| ClientError::decode(UNPITTED, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let config = BackendConfig::new("http://localhost:3007", Duration::from_secs(5)).unwrap();
        let client = RestBackend::new(config).unwrap();
        assert_eq!(client.url(AUTH_CHECK), "http://localhost:3007/auth/check");
        assert_eq!(
            client.url(CURRENT_MATCH),
            "http://localhost:3007/scout/get/current_match"
        );
    }

    #[test]
    fn roster_pairs_map_to_entries() {
        let pairs = vec![("Ada".to_string(), 87.5), ("Grace".to_string(), 92.0)];
        let entries: Vec<RosterEntry> = pairs.into_iter().map(RosterEntry::from).collect();
        assert_eq!(entries[1].name, "Grace");
        assert_eq!(entries[1].percent, 92.0);
    }
}
