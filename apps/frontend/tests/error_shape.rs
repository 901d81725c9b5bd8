//! The stable error contract: every refusal is problem-details JSON with a
//! trace id that matches the response headers.

mod support;

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use frontend::client::{AuthDecision, MockBackend};

use crate::support::spawn_app;

#[actix_web::test]
async fn gate_rejection_carries_a_real_trace_id() {
    let backend =
        Arc::new(MockBackend::new().with_check(Ok(AuthDecision { authorized: false })));
    let app = spawn_app(backend).await;

    let req = test::TestRequest::get()
        .uri("/app/home")
        .cookie(Cookie::new("access_token", "bad"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id present");
    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id present");

    let body: serde_json::Value = test::read_body_json(resp).await;
    let body_trace = body["trace_id"].as_str().unwrap();

    assert_ne!(body_trace, "unknown");
    assert_eq!(body_trace, trace_header);
    assert_eq!(body_trace, request_id);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn handler_errors_share_the_same_shape() {
    let app = spawn_app(Arc::new(MockBackend::new())).await;

    // A draft fetch with no stored draft produces a 404 through AppError
    let req = test::TestRequest::get()
        .uri("/app/scout/draft")
        .cookie(Cookie::new("access_token", "tok"))
        .cookie(Cookie::new("scout_id", "s9"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(content_type, "application/problem+json");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "DRAFT_NOT_FOUND");
    assert_eq!(body["status"], 404);
    assert!(body["type"].as_str().unwrap().ends_with("DRAFT_NOT_FOUND"));
    assert_ne!(body["trace_id"], "unknown");
}
