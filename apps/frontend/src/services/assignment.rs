//! The assignment client: who scouts which team.
//!
//! One allocation attempt per request, no retries. The current-match lookup
//! rides along concurrently because neither request depends on the other,
//! and its failure only costs the match label on the page.

use serde::Serialize;
use tracing::warn;

use crate::client::{AssignmentOutcome, ScoutBackend};

/// Path segment meaning "re-render without asking the backend for a team".
pub const RELOAD_SENTINEL: &str = "reload";

/// An allocated team, shaped for the scouting page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedTeam {
    pub team_key: String,
    pub team_color: Option<String>,
    pub scout_id: Option<String>,
    pub match_key: Option<String>,
    pub reload: bool,
}

/// Where the scouting-entry request ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoutLoad {
    /// The sentinel constraint: signal a reload, no team data.
    Reload,
    /// A team was allocated; render the scouting form.
    Assigned(AssignedTeam),
    /// Nothing to scout right now; navigate to the match overview.
    WaitForMatch,
    /// Allocation refused or failed; navigate back to the public entry.
    NotAuthorized,
}

pub async fn load_assignment(
    backend: &dyn ScoutBackend,
    credential: &str,
    scout_id: Option<&str>,
    requested_color: Option<&str>,
) -> ScoutLoad {
    if requested_color == Some(RELOAD_SENTINEL) {
        return ScoutLoad::Reload;
    }

    let (team, current) = tokio::join!(
        backend.request_team(credential, requested_color),
        backend.current_match(),
    );

    let match_key = match current {
        Ok(key) => Some(key),
        Err(err) => {
            warn!(error = %err, "current match lookup failed");
            None
        }
    };

    match team {
        Ok(AssignmentOutcome::Assigned(assignment)) => ScoutLoad::Assigned(AssignedTeam {
            team_key: assignment.team_key,
            team_color: assignment.color,
            scout_id: scout_id.map(str::to_string),
            match_key,
            reload: false,
        }),
        Ok(AssignmentOutcome::NoneAvailable) => ScoutLoad::WaitForMatch,
        Ok(AssignmentOutcome::Denied) => ScoutLoad::NotAuthorized,
        Err(err) => {
            warn!(error = %err, "team allocation failed");
            ScoutLoad::NotAuthorized
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::RecordedCall;
    use crate::client::{ClientError, MockBackend, TeamAssignment};

    use super::*;

    fn assigned(team_key: &str, color: Option<&str>) -> AssignmentOutcome {
        AssignmentOutcome::Assigned(TeamAssignment {
            team_key: team_key.to_string(),
            color: color.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn reload_sentinel_skips_the_backend() {
        let backend = MockBackend::new();
        let load = load_assignment(&backend, "tok", Some("s1"), Some(RELOAD_SENTINEL)).await;
        assert_eq!(load, ScoutLoad::Reload);
        assert!(backend.recorded().is_empty());
    }

    #[tokio::test]
    async fn allocated_team_carries_scout_and_match() {
        let backend = MockBackend::new()
            .with_team(Ok(assigned("frc2910", Some("red"))))
            .with_current_match(Ok("2024wasno_qm12".to_string()));

        let load = load_assignment(&backend, "tok", Some("s1"), Some("red")).await;
        assert_eq!(
            load,
            ScoutLoad::Assigned(AssignedTeam {
                team_key: "frc2910".to_string(),
                team_color: Some("red".to_string()),
                scout_id: Some("s1".to_string()),
                match_key: Some("2024wasno_qm12".to_string()),
                reload: false,
            })
        );
    }

    #[tokio::test]
    async fn color_constraint_is_forwarded() {
        let backend = MockBackend::new().with_team(Ok(assigned("frc1678", Some("blue"))));
        load_assignment(&backend, "tok", None, Some("blue")).await;

        let calls = backend.recorded();
        assert!(calls.contains(&RecordedCall::RequestTeam {
            credential: "tok".to_string(),
            requested_color: Some("blue".to_string()),
        }));
        assert!(calls.contains(&RecordedCall::CurrentMatch));
    }

    #[tokio::test]
    async fn no_team_available_waits_for_match() {
        let backend = MockBackend::new().with_team(Ok(AssignmentOutcome::NoneAvailable));
        let load = load_assignment(&backend, "tok", None, None).await;
        assert_eq!(load, ScoutLoad::WaitForMatch);
    }

    #[tokio::test]
    async fn denied_allocation_is_not_authorized() {
        let backend = MockBackend::new().with_team(Ok(AssignmentOutcome::Denied));
        let load = load_assignment(&backend, "tok", None, None).await;
        assert_eq!(load, ScoutLoad::NotAuthorized);
    }

    #[tokio::test]
    async fn allocation_transport_error_is_not_authorized() {
        let backend = MockBackend::new().with_team(Err(ClientError::transport(
            "/scout/request_team",
            "connection reset",
        )));
        let load = load_assignment(&backend, "tok", None, None).await;
        assert_eq!(load, ScoutLoad::NotAuthorized);
    }

    #[tokio::test]
    async fn current_match_failure_does_not_block_assignment() {
        let backend = MockBackend::new()
            .with_team(Ok(assigned("frc2910", None)))
            .with_current_match(Err(ClientError::status("/scout/get/current_match", 500)));

        let load = load_assignment(&backend, "tok", None, None).await;
        match load {
            ScoutLoad::Assigned(team) => {
                assert_eq!(team.team_key, "frc2910");
                assert_eq!(team.match_key, None);
            }
            other => panic!("expected assignment, got {other:?}"),
        }
    }
}
