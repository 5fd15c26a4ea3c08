//! Shared application state
//!
//! Estado compartido que se pasa a través de los routers de Axum.
//! Todo se construye explícitamente en `main` y se inyecta aquí.

use std::sync::Arc;

use crate::controllers::{CarController, PriceController};

/// Estado del vehicles-api
#[derive(Clone)]
pub struct AppState {
    pub car_controller: Arc<CarController>,
    pub service_name: String,
}

impl AppState {
    pub fn new(car_controller: CarController, service_name: impl Into<String>) -> Self {
        Self {
            car_controller: Arc::new(car_controller),
            service_name: service_name.into(),
        }
    }
}

/// Estado del pricing-service
#[derive(Clone)]
pub struct PricingState {
    pub price_controller: Arc<PriceController>,
    pub service_name: String,
}

impl PricingState {
    pub fn new(price_controller: PriceController, service_name: impl Into<String>) -> Self {
        Self {
            price_controller: Arc::new(price_controller),
            service_name: service_name.into(),
        }
    }
}
