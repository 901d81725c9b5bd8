//! Problem-details assertion helpers.
//!
//! Mirrors the gateway's error contract without depending on its types, so
//! the contract itself is what gets tested.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local shape matching the gateway's `ProblemDetails`.
#[derive(Debug, Deserialize, Serialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that response parts conform to the stable error contract:
/// - HTTP status matches
/// - the body parses as problem details with the expected code
/// - the body's status field agrees with the HTTP status
/// - the detail contains the given fragment, when one is expected
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(
        status, expected_status,
        "unexpected HTTP status (body: {})",
        String::from_utf8_lossy(body_bytes)
    );

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(content_type, "application/problem+json");

    let parsed: ProblemDetailsLike =
        serde_json::from_slice(body_bytes).expect("body parses as problem details");

    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.status, expected_status.as_u16());
    assert!(
        parsed.type_.ends_with(&parsed.code),
        "type URI '{}' should end with the code '{}'",
        parsed.type_,
        parsed.code
    );
    assert!(!parsed.title.is_empty());
    assert!(!parsed.trace_id.is_empty());

    if let Some(fragment) = expected_detail_contains {
        assert!(
            parsed.detail.contains(fragment),
            "detail '{}' should contain '{}'",
            parsed.detail,
            fragment
        );
    }

    if let Some(header_trace) = headers.get("x-trace-id").and_then(|v| v.to_str().ok()) {
        assert_eq!(header_trace, parsed.trace_id);
    }
}
