use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;

/// Cookie carrying the opaque access credential. Forwarded verbatim to the
/// backend, never interpreted here.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const SCOUT_ID_COOKIE: &str = "scout_id";
pub const SCOUT_NAME_COOKIE: &str = "scout_name";
pub const EVENT_KEY_COOKIE: &str = "event_key";

/// Read-only view of the session cookies a request carries.
///
/// Extraction never fails; absent cookies are simply `None`. Whether a
/// missing credential matters is the gatekeeper's call, not the
/// extractor's.
#[derive(Debug, Clone, Default)]
pub struct ScoutSession {
    pub access_token: Option<String>,
    pub scout_id: Option<String>,
    pub scout_name: Option<String>,
    pub event_key: Option<String>,
}

impl ScoutSession {
    pub fn from_request_cookies(req: &HttpRequest) -> Self {
        Self {
            access_token: cookie_value(req, ACCESS_TOKEN_COOKIE),
            scout_id: cookie_value(req, SCOUT_ID_COOKIE),
            scout_name: cookie_value(req, SCOUT_NAME_COOKIE),
            event_key: cookie_value(req, EVENT_KEY_COOKIE),
        }
    }
}

fn cookie_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.cookie(name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

impl FromRequest for ScoutSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_request_cookies(req)))
    }
}
