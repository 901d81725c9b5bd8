//! Scripted in-process stand-in for the scouting backend.
//!
//! Used by unit tests and the integration suites alike: script each
//! operation's answer up front, then assert on the recorded calls.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{AssignmentOutcome, AuthDecision, ClientError, RosterEntry, ScoutBackend};

/// One observed call, with the arguments the gateway actually sent.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Check {
        credential: String,
        is_admin: bool,
    },
    RequestTeam {
        credential: String,
        requested_color: Option<String>,
    },
    CurrentMatch,
    Roster,
    Unpitted,
}

pub struct MockBackend {
    check_response: Mutex<Result<AuthDecision, ClientError>>,
    team_response: Mutex<Result<AssignmentOutcome, ClientError>>,
    match_response: Mutex<Result<String, ClientError>>,
    roster_response: Mutex<Result<Vec<RosterEntry>, ClientError>>,
    unpitted_response: Mutex<Result<Vec<String>, ClientError>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            check_response: Mutex::new(Ok(AuthDecision { authorized: true })),
            team_response: Mutex::new(Ok(AssignmentOutcome::NoneAvailable)),
            match_response: Mutex::new(Ok("2024test_qm1".to_string())),
            roster_response: Mutex::new(Ok(Vec::new())),
            unpitted_response: Mutex::new(Ok(Vec::new())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(self, response: Result<AuthDecision, ClientError>) -> Self {
        *self.check_response.lock().unwrap() = response;
        self
    }

    pub fn with_team(self, response: Result<AssignmentOutcome, ClientError>) -> Self {
        *self.team_response.lock().unwrap() = response;
        self
    }

    pub fn with_current_match(self, response: Result<String, ClientError>) -> Self {
        *self.match_response.lock().unwrap() = response;
        self
    }

    pub fn with_roster(self, response: Result<Vec<RosterEntry>, ClientError>) -> Self {
        *self.roster_response.lock().unwrap() = response;
        self
    }

    pub fn with_unpitted(self, response: Result<Vec<String>, ClientError>) -> Self {
        *self.unpitted_response.lock().unwrap() = response;
        self
    }

    /// Everything the gateway called, in order.
    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ScoutBackend for MockBackend {
    async fn check(&self, credential: &str, is_admin: bool) -> Result<AuthDecision, ClientError> {
        self.record(RecordedCall::Check {
            credential: credential.to_string(),
            is_admin,
        });
        self.check_response.lock().unwrap().clone()
    }

    async fn request_team(
        &self,
        credential: &str,
        requested_color: Option<&str>,
    ) -> Result<AssignmentOutcome, ClientError> {
        self.record(RecordedCall::RequestTeam {
            credential: credential.to_string(),
            requested_color: requested_color.map(str::to_string),
        });
        self.team_response.lock().unwrap().clone()
    }

    async fn current_match(&self) -> Result<String, ClientError> {
        self.record(RecordedCall::CurrentMatch);
        self.match_response.lock().unwrap().clone()
    }

    async fn roster(&self) -> Result<Vec<RosterEntry>, ClientError> {
        self.record(RecordedCall::Roster);
        self.roster_response.lock().unwrap().clone()
    }

    async fn unpitted(&self) -> Result<Vec<String>, ClientError> {
        self.record(RecordedCall::Unpitted);
        self.unpitted_response.lock().unwrap().clone()
    }
}
