//! Contract tests for the CORS policy
//!
//! Uses the same `ServerConfig::cors` policy as the binary, both open to any
//! origin and restricted to a single configured origin.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::{header, Method, StatusCode};
use actix_web::test;
use card_catalog::config::ServerConfig;
use helpers::*;

const ALLOWED: &str = "https://cards.example.com";
const OTHER: &str = "https://elsewhere.example.org";

fn restricted_server() -> ServerConfig {
    let mut server = ServerConfig::new("127.0.0.1".to_string(), 0);
    server.cors_allowed_origin = Some(ALLOWED.to_string());
    server
}

fn preflight(uri: &str, origin: &str, method: &str) -> test::TestRequest {
    test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri(uri)
        .insert_header((header::ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, method))
}

#[actix_web::test]
async fn test_preflight_from_any_origin() {
    let app = test::init_service(test_app(TestDataFactory::classic_cards())).await;

    let req = preflight("/api/card/all", OTHER, "GET").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        OTHER
    );
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_MAX_AGE).unwrap(),
        "3600"
    );
}

#[actix_web::test]
async fn test_get_from_any_origin_is_tagged() {
    let app = test::init_service(test_app(TestDataFactory::classic_cards())).await;

    let req = test::TestRequest::get()
        .uri("/api/card/search?q=bolt")
        .insert_header((header::ORIGIN, OTHER))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        OTHER
    );
}

#[actix_web::test]
async fn test_preflight_for_write_method_is_rejected() {
    let app = test::init_service(test_app(TestDataFactory::classic_cards())).await;

    for method in ["POST", "DELETE"] {
        let req = preflight("/api/card/all", OTHER, method).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", method);
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}

#[actix_web::test]
async fn test_configured_origin_is_allowed() {
    let app = test::init_service(test_app_configured(
        card_service(TestDataFactory::classic_cards()),
        &restricted_server(),
    ))
    .await;

    let req = preflight("/api/card/", ALLOWED, "GET").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED
    );

    let req = test::TestRequest::get()
        .uri("/api/card/all")
        .insert_header((header::ORIGIN, ALLOWED))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED
    );
}

#[actix_web::test]
async fn test_other_origin_is_refused_when_one_is_configured() {
    let app = test::init_service(test_app_configured(
        card_service(TestDataFactory::classic_cards()),
        &restricted_server(),
    ))
    .await;

    let req = preflight("/api/card/", OTHER, "GET").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());

    // The request is still served, but browsers get no allow-origin header
    let req = test::TestRequest::get()
        .uri("/api/card/all")
        .insert_header((header::ORIGIN, OTHER))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[actix_web::test]
async fn test_same_origin_requests_are_unaffected() {
    let app = test::init_service(test_app_configured(
        card_service(TestDataFactory::classic_cards()),
        &restricted_server(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/card/all").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
