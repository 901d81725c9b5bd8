use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::ScoutSession;

#[derive(Debug, Serialize)]
struct LandingData {
    authenticated: bool,
}

/// Public entry page data. The gatekeeper already redirects authenticated
/// scouts to the landing route, so this only ever reports whether a
/// credential cookie is present at all.
async fn landing(session: ScoutSession) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(LandingData {
        authenticated: session.access_token.is_some(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(landing)));
}
