use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::warn;

use crate::client::RosterEntry;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct AdminData {
    roster: Vec<RosterEntry>,
}

/// Admin review page: the full scout roster with completion percentages.
/// The gatekeeper already required admin privilege for this path; a roster
/// fetch failure is logged and renders as an empty list.
async fn review(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let roster = match state.backend.roster().await {
        Ok(roster) => roster,
        Err(err) => {
            warn!(error = %err, "failed to fetch roster for admin review");
            Vec::new()
        }
    };

    Ok(HttpResponse::Ok().json(AdminData { roster }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/app/admin").route(web::get().to(review)));
}
