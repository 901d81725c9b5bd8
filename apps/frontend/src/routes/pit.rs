use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::warn;

use crate::error::AppError;
use crate::extractors::ScoutSession;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct PitData {
    scout_id: Option<String>,
    unpitted_teams: Vec<String>,
}

/// Pit scouting page: which teams still need a pit visit.
async fn pit(
    session: ScoutSession,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let unpitted_teams = match state.backend.unpitted().await {
        Ok(teams) => teams,
        Err(err) => {
            warn!(error = %err, "failed to fetch unpitted teams");
            Vec::new()
        }
    };

    Ok(HttpResponse::Ok().json(PitData {
        scout_id: session.scout_id,
        unpitted_teams,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/app/pit").route(web::get().to(pit)));
}
