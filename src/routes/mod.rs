//! Routers
//!
//! Ensambla los routers completos de cada binario, con health check,
//! CORS y trazas HTTP.

pub mod car_routes;
pub mod price_routes;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::{AppState, PricingState};

/// Router del vehicles-api
pub fn create_vehicles_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(vehicles_health))
        .merge(car_routes::create_car_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(cors_origins))
        .with_state(state)
}

/// Router del pricing-service
pub fn create_pricing_app(state: PricingState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(pricing_health))
        .merge(price_routes::create_price_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(cors_origins))
        .with_state(state)
}

async fn vehicles_health(State(state): State<AppState>) -> Json<Value> {
    health_body(&state.service_name)
}

async fn pricing_health(State(state): State<PricingState>) -> Json<Value> {
    health_body(&state.service_name)
}

fn health_body(service: &str) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": service,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
