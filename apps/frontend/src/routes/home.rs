use std::cmp::Ordering;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::warn;

use crate::client::RosterEntry;
use crate::error::AppError;
use crate::extractors::ScoutSession;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HomeData {
    scout_name: Option<String>,
    scout_id: Option<String>,
    event_key: Option<String>,
    roster: Vec<RosterEntry>,
}

/// Authenticated landing page: who the scout is plus the roster ranked by
/// completion percentage. A roster fetch failure degrades to an empty list.
async fn home(
    session: ScoutSession,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let roster = match state.backend.roster().await {
        Ok(mut roster) => {
            sort_by_percent_desc(&mut roster);
            roster
        }
        Err(err) => {
            warn!(error = %err, "failed to fetch scout roster");
            Vec::new()
        }
    };

    Ok(HttpResponse::Ok().json(HomeData {
        scout_name: session.scout_name,
        scout_id: session.scout_id,
        event_key: session.event_key,
        roster,
    }))
}

fn sort_by_percent_desc(entries: &mut [RosterEntry]) {
    entries.sort_by(|a, b| b.percent.partial_cmp(&a.percent).unwrap_or(Ordering::Equal));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/app/home").route(web::get().to(home)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, percent: f64) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            percent,
        }
    }

    #[test]
    fn roster_sorts_descending_by_percent() {
        let mut roster = vec![entry("Ada", 61.0), entry("Grace", 94.5), entry("Mae", 80.0)];
        sort_by_percent_desc(&mut roster);
        let names: Vec<&str> = roster.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Grace", "Mae", "Ada"]);
    }

    #[test]
    fn roster_sort_tolerates_ties() {
        let mut roster = vec![entry("Ada", 50.0), entry("Grace", 50.0)];
        sort_by_percent_desc(&mut roster);
        assert_eq!(roster.len(), 2);
    }
}
