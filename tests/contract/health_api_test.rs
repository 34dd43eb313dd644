//! Contract tests for the liveness and readiness probes

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test};
use card_catalog::health::controllers::{HealthResponse, ReadinessResponse};
use helpers::*;

#[actix_web::test]
async fn test_health_reports_healthy() {
    let app = test::init_service(test_app(vec![])).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(body.status, "healthy");
    assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
}

#[actix_web::test]
async fn test_ready_when_store_reachable() {
    let app = test::init_service(test_app(TestDataFactory::classic_cards())).await;

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ReadinessResponse = test::read_body_json(resp).await;
    assert!(body.ready);
    assert!(body.checks.database);
    assert!(body.checks.application);
}

#[actix_web::test]
async fn test_not_ready_when_store_down() {
    let service = actix_web::web::Data::new(card_catalog::cards::CardService::new(
        std::sync::Arc::new(UnavailableCardRepository),
    ));
    let app = test::init_service(test_app_with(service)).await;

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: ReadinessResponse = test::read_body_json(resp).await;
    assert!(!body.ready);
    assert!(!body.checks.database);
}
