use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::ScoutSession;
use crate::gate::PUBLIC_ENTRY;
use crate::services::assignment::{self, ScoutLoad};
use crate::state::app_state::AppState;

const MATCH_OVERVIEW_ROUTE: &str = "/app/match";

#[derive(Debug, Serialize)]
struct ReloadData {
    reload: bool,
}

/// Scouting entry without a color constraint.
async fn entry(
    session: ScoutSession,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    load(session, state, None).await
}

/// Scouting entry constrained to one alliance color, or the reload
/// sentinel.
async fn entry_with_color(
    session: ScoutSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let color = path.into_inner();
    load(session, state, Some(color)).await
}

async fn load(
    session: ScoutSession,
    state: web::Data<AppState>,
    color: Option<String>,
) -> Result<HttpResponse, AppError> {
    // The gatekeeper vouched for the credential; a request without one can
    // only mean the cookie vanished mid-session, which the allocation
    // contract treats the same as a refusal.
    let Some(credential) = session.access_token else {
        return Ok(see_other(PUBLIC_ENTRY));
    };

    let outcome = assignment::load_assignment(
        state.backend.as_ref(),
        &credential,
        session.scout_id.as_deref(),
        color.as_deref(),
    )
    .await;

    Ok(match outcome {
        ScoutLoad::Reload => HttpResponse::Ok().json(ReloadData { reload: true }),
        ScoutLoad::Assigned(team) => HttpResponse::Ok().json(team),
        ScoutLoad::WaitForMatch => see_other(MATCH_OVERVIEW_ROUTE),
        ScoutLoad::NotAuthorized => see_other(PUBLIC_ENTRY),
    })
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/app/scout").route(web::get().to(entry)))
        .service(web::resource("/app/scout/{color}").route(web::get().to(entry_with_color)));
}
