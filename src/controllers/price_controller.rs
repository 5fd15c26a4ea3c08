use std::sync::Arc;

use crate::models::price::Price;
use crate::services::price_service::PriceLookupService;
use crate::utils::errors::AppError;

pub struct PriceController {
    service: Arc<PriceLookupService>,
}

impl PriceController {
    pub fn new(service: Arc<PriceLookupService>) -> Self {
        Self { service }
    }

    pub async fn get_by_vehicle_id(&self, vehicle_id: i64) -> Result<Price, AppError> {
        Ok(self.service.get_price(vehicle_id).await?)
    }
}
