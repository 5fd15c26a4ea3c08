//! Price Lookup Service
//!
//! Envuelve el price store: dado un vehicle id devuelve su precio o un
//! `NotFound` distinguible de los fallos de almacenamiento.

use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::price::Price;
use crate::repositories::price_repository::PriceRepository;
use crate::utils::errors::AppError;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Error)]
pub enum PriceLookupError {
    #[error("no price available for vehicle {0}")]
    NotFound(i64),

    #[error("storage error")]
    Storage(#[from] sqlx::Error),
}

impl From<PriceLookupError> for AppError {
    fn from(error: PriceLookupError) -> Self {
        match error {
            PriceLookupError::NotFound(vehicle_id) => {
                AppError::NotFound(format!("Price for vehicle '{}' not found", vehicle_id))
            }
            PriceLookupError::Storage(e) => AppError::Database(e),
        }
    }
}

#[derive(Clone)]
pub struct PriceLookupService {
    repository: Arc<dyn PriceRepository>,
}

impl PriceLookupService {
    pub fn new(repository: Arc<dyn PriceRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_price(&self, vehicle_id: i64) -> Result<Price, PriceLookupError> {
        if vehicle_id <= 0 {
            return Err(PriceLookupError::NotFound(vehicle_id));
        }

        let price = self
            .repository
            .find_by_vehicle_id(vehicle_id)
            .await?
            .ok_or(PriceLookupError::NotFound(vehicle_id))?;

        debug!("💰 Precio encontrado para vehículo {}: {}", vehicle_id, price.display());
        Ok(price)
    }

    /// Carga precios aleatorios para los vehículos `1..=vehicle_count`
    /// si la tabla está vacía. Devuelve cuántas filas se insertaron.
    pub async fn seed_prices(&self, vehicle_count: i64) -> Result<usize, PriceLookupError> {
        if self.repository.count().await? > 0 {
            info!("💾 Tabla de precios ya poblada, se omite el seed");
            return Ok(0);
        }

        let prices: Vec<Price> = {
            let mut rng = rand::thread_rng();
            (1..=vehicle_count)
                .map(|vehicle_id| {
                    let cents: i64 = rng.gen_range(1_000_000..=10_000_000);
                    Price::new(vehicle_id, Decimal::new(cents, 2), DEFAULT_CURRENCY)
                })
                .collect()
        };

        for price in &prices {
            self.repository.create(price).await?;
        }

        info!("💾 {} precios generados", prices.len());
        Ok(prices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::price_repository::MockPriceRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_price_returns_stored_row() {
        let mut repository = MockPriceRepository::new();
        repository
            .expect_find_by_vehicle_id()
            .with(eq(1))
            .times(1)
            .returning(|vehicle_id| Ok(Some(Price::new(vehicle_id, Decimal::new(1500000, 2), "USD"))));

        let service = PriceLookupService::new(Arc::new(repository));
        let price = service.get_price(1).await.unwrap();

        assert_eq!(price.vehicle_id, 1);
        assert_eq!(price.display(), "USD 15000.00");
    }

    #[tokio::test]
    async fn test_get_price_missing_row_is_not_found() {
        let mut repository = MockPriceRepository::new();
        repository.expect_find_by_vehicle_id().returning(|_| Ok(None));

        let service = PriceLookupService::new(Arc::new(repository));
        let result = service.get_price(42).await;

        assert!(matches!(result, Err(PriceLookupError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_get_price_non_positive_id_skips_store() {
        let mut repository = MockPriceRepository::new();
        repository.expect_find_by_vehicle_id().never();

        let service = PriceLookupService::new(Arc::new(repository));
        assert!(matches!(service.get_price(0).await, Err(PriceLookupError::NotFound(0))));
    }

    #[tokio::test]
    async fn test_get_price_storage_failure_is_distinct() {
        let mut repository = MockPriceRepository::new();
        repository
            .expect_find_by_vehicle_id()
            .returning(|_| Err(sqlx::Error::PoolTimedOut));

        let service = PriceLookupService::new(Arc::new(repository));
        assert!(matches!(service.get_price(3).await, Err(PriceLookupError::Storage(_))));
    }

    #[tokio::test]
    async fn test_seed_prices_only_when_empty() {
        let mut repository = MockPriceRepository::new();
        repository.expect_count().times(1).returning(|| Ok(0));
        repository
            .expect_create()
            .times(20)
            .returning(|price| Ok(price.clone()));

        let service = PriceLookupService::new(Arc::new(repository));
        assert_eq!(service.seed_prices(20).await.unwrap(), 20);

        let mut populated = MockPriceRepository::new();
        populated.expect_count().returning(|| Ok(5));
        populated.expect_create().never();

        let service = PriceLookupService::new(Arc::new(populated));
        assert_eq!(service.seed_prices(20).await.unwrap(), 0);
    }
}
