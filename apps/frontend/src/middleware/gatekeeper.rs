//! Gatekeeper middleware
//!
//! Intercepts every inbound request before route handling and resolves it
//! through `gate::evaluate`. The decision arrives as one typed outcome and
//! is interpreted here, in one place: allow forwards to the wrapped
//! service, redirect answers 303 with a Location header, reject renders
//! the problem-details error. Rejections are rendered inside the request's
//! trace scope so they carry the real trace id.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::http::header;
use actix_web::{web, Error, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::error::AppError;
use crate::extractors::session::ACCESS_TOKEN_COOKIE;
use crate::gate::{self, GateOutcome};
use crate::state::app_state::AppState;

pub struct Gatekeeper;

impl<S, B> Transform<S, ServiceRequest> for Gatekeeper
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GatekeeperMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GatekeeperMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct GatekeeperMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for GatekeeperMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Everything the decision needs, taken before req moves
        let path = req.path().to_string();
        let credential = req
            .cookie(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());
        let app_state = req.app_data::<web::Data<AppState>>().cloned();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(state) = app_state else {
                return Err(AppError::internal("AppState not available").into());
            };

            let outcome =
                gate::evaluate(state.backend.as_ref(), &path, credential.as_deref()).await;

            match outcome {
                GateOutcome::Allow => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                GateOutcome::Redirect(location) => {
                    let res = HttpResponse::SeeOther()
                        .insert_header((header::LOCATION, location))
                        .finish()
                        .map_into_right_body();
                    Ok(req.into_response(res))
                }
                GateOutcome::Reject(err) => {
                    let res = err.error_response().map_into_right_body();
                    Ok(req.into_response(res))
                }
            }
        })
    }
}
