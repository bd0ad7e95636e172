#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use payfee::payfee::router;
use serde_json::Value;
use std::fs;
use tower::ServiceExt;

const INDEX: &str = "<!doctype html><title>Payfee</title>";

fn dist() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), INDEX).expect("index.html");
    fs::write(dir.path().join("payfee-web.js"), "export default 1;").expect("js");
    dir
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_build_metadata() {
    let dir = dist();
    let response = router(dir.path())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let app = response
        .headers()
        .get("X-App")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .expect("X-App header");
    assert!(app.starts_with(&format!("payfee:{}:", env!("CARGO_PKG_VERSION"))));
    assert!(response.headers().contains_key("x-request-id"));

    let json: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["name"], "payfee");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["build"].is_string());
}

#[tokio::test]
async fn health_answers_options() {
    let dir = dist();
    let response = router(dir.path())
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn static_assets_are_served() {
    let dir = dist();
    let response = router(dir.path())
        .oneshot(Request::get("/payfee-web.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "export default 1;");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dir = dist();
    for path in ["/", "/dashboard", "/application", "/no/such/page"] {
        let response = router(dir.path())
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(body_string(response).await, INDEX, "{path}");
    }
}

#[tokio::test]
async fn request_id_is_propagated() {
    let dir = dist();
    let response = router(dir.path())
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("req-123")
    );
}
