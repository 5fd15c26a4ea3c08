use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use mockall::predicate::eq;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use vehicles_api::controllers::PriceController;
use vehicles_api::models::price::Price;
use vehicles_api::repositories::price_repository::MockPriceRepository;
use vehicles_api::routes::create_pricing_app;
use vehicles_api::services::PriceLookupService;
use vehicles_api::state::PricingState;

fn create_test_app(repository: MockPriceRepository) -> Router {
    let service = Arc::new(PriceLookupService::new(Arc::new(repository)));
    create_pricing_app(PricingState::new(PriceController::new(service), "pricing-service"), &[])
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn price_for_known_vehicle() {
    let mut repository = MockPriceRepository::new();
    repository
        .expect_find_by_vehicle_id()
        .with(eq(1))
        .returning(|vehicle_id| Ok(Some(Price::new(vehicle_id, Decimal::new(1500000, 2), "USD"))));
    let app = create_test_app(repository);

    let response = app.oneshot(get("/services/price?vehicleId=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["vehicleId"], 1);
    assert_eq!(body["price"], "15000.00");
    assert_eq!(body["currency"], "USD");
}

#[tokio::test]
async fn price_for_unknown_vehicle_is_not_found() {
    let mut repository = MockPriceRepository::new();
    repository.expect_find_by_vehicle_id().returning(|_| Ok(None));
    let app = create_test_app(repository);

    let response = app.oneshot(get("/services/price?vehicleId=77")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn price_storage_failure_is_server_error() {
    let mut repository = MockPriceRepository::new();
    repository
        .expect_find_by_vehicle_id()
        .returning(|_| Err(sqlx::Error::PoolTimedOut));
    let app = create_test_app(repository);

    let response = app.oneshot(get("/services/price?vehicleId=2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn price_without_vehicle_id_is_bad_request() {
    let mut repository = MockPriceRepository::new();
    repository.expect_find_by_vehicle_id().never();
    let app = create_test_app(repository);

    let missing = app.clone().oneshot(get("/services/price")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let malformed = app.oneshot(get("/services/price?vehicleId=abc")).await.unwrap();
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}
