use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct MatchOverviewData {
    match_key: Option<String>,
}

/// Match overview: the match currently in progress. Scouts land here while
/// waiting for a team, so a failed lookup renders as "no match yet" rather
/// than an error.
async fn overview(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let match_key = match state.backend.current_match().await {
        Ok(key) => Some(key),
        Err(err) => {
            warn!(error = %err, "current match lookup failed");
            None
        }
    };

    Ok(HttpResponse::Ok().json(MatchOverviewData { match_key }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/app/match").route(web::get().to(overview)));
}
