use std::sync::Arc;

use actix_http::Request;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use frontend::client::MockBackend;
use frontend::middleware::gatekeeper::Gatekeeper;
use frontend::middleware::request_trace::RequestTrace;
use frontend::middleware::structured_logger::StructuredLogger;
use frontend::routes;
use frontend::state::app_state::AppState;

/// Build a test service with the production middleware stack and routes,
/// backed by the given scripted backend. CORS is left off: it needs no
/// coverage here and would only add preflight noise.
pub async fn spawn_app(
    backend: Arc<MockBackend>,
) -> impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error> {
    let data = web::Data::new(AppState::new(backend));

    test::init_service(
        App::new()
            .wrap(Gatekeeper)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data)
            .configure(routes::configure),
    )
    .await
}
