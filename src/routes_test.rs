use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_serve_healthz() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let res = base_routes().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn base_routes_reject_unknown_paths() {
    let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let res = base_routes().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
