use super::*;

use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

fn config(base_path: &str) -> ServerConfig {
    ServerConfig { port: 3000, bind_addr: "127.0.0.1".parse().unwrap(), base_path: base_path.to_owned() }
}

async fn get_status(router: Router, uri: &str) -> (StatusCode, Option<String>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    (response.status(), location)
}

// =============================================================================
// base_routes
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_status(base_routes(&config("")), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn prefixed_root_redirects_to_register() {
    let (status, location) = get_status(base_routes(&config("/qbv")), "/").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/qbv/register"));
}

#[tokio::test]
async fn unprefixed_root_is_left_to_the_app() {
    let (status, _) = get_status(base_routes(&config("")), "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _) = get_status(base_routes(&config("/qbv")), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
