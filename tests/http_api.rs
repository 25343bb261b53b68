//! End-to-end tests for the HTTP API.
//!
//! These drive the real router without a live datastore: the root and
//! health routes never touch it, and the search route fails at the
//! connection step when no parameters are configured.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use propsearch::http_server::HttpServer;

fn router() -> Router {
    HttpServer::new().router()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Welcome to the Property Search API");
}

#[tokio::test]
async fn health_reports_ok() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = router()
        .oneshot(Request::builder().uri("/listings").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_without_datastore_is_500_with_detail() {
    // No DB_* variables are set in the test environment, so connection
    // acquisition fails before any network I/O.
    for name in ["DB_USER", "DB_HOST", "DB_NAME", "DB_PASSWORD", "DB_PORT"] {
        std::env::remove_var(name);
    }

    let response = router()
        .oneshot(
            Request::builder()
                .uri("/search?city=Paris")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let detail = json["detail"].as_str().unwrap();
    assert!(!detail.is_empty());
}

#[tokio::test]
async fn cors_mirrors_origin_with_credentials() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://app.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn cors_preflight_mirrors_request() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/search")
                .header(header::ORIGIN, "https://app.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-requested-with")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "x-requested-with"
    );
}
