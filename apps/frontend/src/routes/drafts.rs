use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::ScoutSession;
use crate::services::drafts::MatchDraft;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct DraftEnvelope {
    draft: MatchDraft,
    updated_at: i64,
}

#[derive(Debug, Serialize)]
struct DraftStored {
    updated_at: i64,
}

fn require_scout_id(session: &ScoutSession) -> Result<&str, AppError> {
    session.scout_id.as_deref().ok_or_else(|| {
        AppError::bad_request(
            "MISSING_SCOUT_ID",
            "Draft routes require a scout_id cookie".to_string(),
        )
    })
}

async fn fetch(
    session: ScoutSession,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scout_id = require_scout_id(&session)?;

    let (draft, updated_at) = state.drafts.get(scout_id).ok_or_else(|| {
        AppError::not_found(
            "DRAFT_NOT_FOUND",
            format!("No draft stored for scout {scout_id}"),
        )
    })?;

    Ok(HttpResponse::Ok().json(DraftEnvelope {
        draft,
        updated_at: updated_at.unix_timestamp(),
    }))
}

async fn store(
    session: ScoutSession,
    state: web::Data<AppState>,
    draft: web::Json<MatchDraft>,
) -> Result<HttpResponse, AppError> {
    let scout_id = require_scout_id(&session)?;

    let updated_at = state.drafts.put(scout_id, draft.into_inner());
    Ok(HttpResponse::Ok().json(DraftStored {
        updated_at: updated_at.unix_timestamp(),
    }))
}

async fn discard(
    session: ScoutSession,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scout_id = require_scout_id(&session)?;

    state.drafts.discard(scout_id);
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/app/scout/draft")
            .route(web::get().to(fetch))
            .route(web::put().to(store))
            .route(web::delete().to(discard)),
    );
}
