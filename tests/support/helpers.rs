// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use movers_cms::application::services::{ApplicationServices, DEFAULT_DISMISS_AFTER};
use movers_cms::domain::content::ContentRepository;
use movers_cms::infrastructure::util::DefaultSlugGenerator;
use movers_cms::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::FixedClock;

pub fn build_services(repo: Arc<dyn ContentRepository>) -> ApplicationServices {
    build_services_with_ttl(repo, DEFAULT_DISMISS_AFTER)
}

pub fn build_services_with_ttl(
    repo: Arc<dyn ContentRepository>,
    notice_ttl: Duration,
) -> ApplicationServices {
    ApplicationServices::new(
        repo,
        Arc::new(FixedClock),
        Arc::new(DefaultSlugGenerator),
        notice_ttl,
    )
}

pub fn make_test_router(repo: Arc<dyn ContentRepository>) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(repo)),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a JSON body, asserting the content type on the way.
pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

/// Assert the error body shape shared by every failing admin endpoint.
pub async fn assert_error_notice(resp: Response, expected_status: StatusCode) -> Value {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "body: {json}");
    assert_eq!(json["success"], false);
    assert_eq!(json["notice"]["level"], "error");
    assert_eq!(json["notice"]["issued_at"], "2024-01-01T00:00:00+00:00");
    assert_eq!(json["notice"]["dismiss_after_ms"], 4000);
    assert!(
        !json["message"].as_str().unwrap_or_default().is_empty(),
        "expected a message in {json}"
    );
    json
}
