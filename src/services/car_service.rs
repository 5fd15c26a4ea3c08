//! Car Service
//!
//! Orquesta el repositorio de cars con los clientes de precios y mapas.
//! El enriquecimiento en lectura es best-effort: si un colaborador falla
//! el car se devuelve igual, con un precio placeholder y sin dirección.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use mockall::automock;
use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::{MapsClient, PriceClient};
use crate::models::car::Car;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{not_found_error, AppResult};

/// Precio mostrado cuando el pricing-service no responde o no conoce el vehículo
pub const PRICE_UNAVAILABLE: &str = "(consult price)";

/// Cars enriquecidos en paralelo por defecto al listar
pub const DEFAULT_ENRICHMENT_CONCURRENCY: usize = 8;

#[automock]
#[async_trait]
pub trait CarService: Send + Sync {
    /// Todos los cars, enriquecidos con precio y dirección
    async fn list(&self) -> AppResult<Vec<Car>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Car>;

    /// Crea el car si no tiene id; si lo tiene, reemplaza el registro existente
    async fn save(&self, car: Car) -> AppResult<Car>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[derive(Clone)]
pub struct DefaultCarService {
    repository: Arc<dyn CarRepository>,
    prices: Arc<dyn PriceClient>,
    maps: Arc<dyn MapsClient>,
    enrichment_concurrency: usize,
}

impl DefaultCarService {
    pub fn new(
        repository: Arc<dyn CarRepository>,
        prices: Arc<dyn PriceClient>,
        maps: Arc<dyn MapsClient>,
    ) -> Self {
        Self {
            repository,
            prices,
            maps,
            enrichment_concurrency: DEFAULT_ENRICHMENT_CONCURRENCY,
        }
    }

    /// Límite de cars enriquecidos a la vez en `list` (mínimo 1)
    pub fn with_enrichment_concurrency(mut self, limit: usize) -> Self {
        self.enrichment_concurrency = limit.max(1);
        self
    }

    async fn enrich(&self, mut car: Car) -> Car {
        let Some(id) = car.id else {
            return car;
        };

        let (price, address) = futures::join!(
            self.prices.get_price(id),
            self.maps.get_address(car.location.lat, car.location.lon),
        );

        car.price = Some(price.unwrap_or_else(|e| {
            warn!("⚠️ Precio no disponible para car {}: {}", id, e);
            PRICE_UNAVAILABLE.to_string()
        }));

        match address {
            Ok(address) => address.apply_to(&mut car.location),
            Err(e) => warn!("⚠️ Dirección no disponible para car {}: {}", id, e),
        }

        car
    }
}

#[async_trait]
impl CarService for DefaultCarService {
    async fn list(&self) -> AppResult<Vec<Car>> {
        let cars = self.repository.find_all().await?;
        let cars = stream::iter(cars)
            .map(|car| self.enrich(car))
            .buffered(self.enrichment_concurrency)
            .collect::<Vec<_>>()
            .await;
        Ok(cars)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Car> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        Ok(self.enrich(car).await)
    }

    async fn save(&self, car: Car) -> AppResult<Car> {
        match car.id {
            Some(id) => {
                let updated = self
                    .repository
                    .update(id, &car)
                    .await?
                    .ok_or_else(|| not_found_error("Car", &id.to_string()))?;
                info!("🚗 Car {} actualizado", id);
                Ok(updated)
            }
            None => {
                let created = self.repository.create(&car).await?;
                info!("🚗 Car creado con id {:?}", created.id);
                Ok(created)
            }
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Car", &id.to_string()));
        }
        info!("🗑️ Car {} eliminado", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::maps_client::{Address, MockMapsClient};
    use crate::clients::price_client::MockPriceClient;
    use crate::clients::ClientError;
    use crate::models::car::{Condition, Details, Location, Manufacturer};
    use crate::repositories::car_repository::MockCarRepository;
    use crate::utils::errors::AppError;
    use mockall::predicate::eq;

    fn stored_car(id: i64) -> Car {
        let details = Details {
            body: "sedan".to_string(),
            model: "Impala".to_string(),
            manufacturer: Manufacturer::new(101, "Chevrolet"),
            number_of_doors: Some(4),
            fuel_type: Some("Gasoline".to_string()),
            engine: Some("3.6L V6".to_string()),
            mileage: Some(32280),
            model_year: Some(2018),
            production_year: Some(2018),
            external_color: Some("white".to_string()),
        };
        let mut car = Car::new(Condition::Used, details, Location::new(40.730610, -73.935242));
        car.id = Some(id);
        car
    }

    fn address() -> Address {
        Address {
            address: "777 Brockton Avenue".to_string(),
            city: "Abington".to_string(),
            state: "MA".to_string(),
            zip: "2351".to_string(),
        }
    }

    fn healthy_collaborators() -> (MockPriceClient, MockMapsClient) {
        let mut prices = MockPriceClient::new();
        prices
            .expect_get_price()
            .returning(|id| Ok(format!("USD {}.00", id * 1000)));
        let mut maps = MockMapsClient::new();
        maps.expect_get_address().returning(|_, _| Ok(address()));
        (prices, maps)
    }

    fn service(repository: MockCarRepository, prices: MockPriceClient, maps: MockMapsClient) -> DefaultCarService {
        DefaultCarService::new(Arc::new(repository), Arc::new(prices), Arc::new(maps))
    }

    #[tokio::test]
    async fn test_find_by_id_enriches_price_and_address() {
        let mut repository = MockCarRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(stored_car(id))));
        let (prices, maps) = healthy_collaborators();

        let car = service(repository, prices, maps).find_by_id(1).await.unwrap();

        assert_eq!(car.price.as_deref(), Some("USD 1000.00"));
        assert_eq!(car.location.address.as_deref(), Some("777 Brockton Avenue"));
        assert_eq!(car.location.lat, 40.730610);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let mut repository = MockCarRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        let mut prices = MockPriceClient::new();
        prices.expect_get_price().never();
        let maps = MockMapsClient::new();

        let result = service(repository, prices, maps).find_by_id(9).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_price_failure_degrades_to_placeholder() {
        let mut repository = MockCarRepository::new();
        repository.expect_find_by_id().returning(|id| Ok(Some(stored_car(id))));
        let mut prices = MockPriceClient::new();
        prices
            .expect_get_price()
            .returning(|id| Err(ClientError::NotFound(format!("price for vehicle {}", id))));
        let mut maps = MockMapsClient::new();
        maps.expect_get_address()
            .returning(|_, _| Err(ClientError::UnexpectedStatus(503)));

        let car = service(repository, prices, maps).find_by_id(5).await.unwrap();

        assert_eq!(car.price.as_deref(), Some(PRICE_UNAVAILABLE));
        assert_eq!(car.location.address, None);
        assert_eq!(car.location.lon, -73.935242);
    }

    #[tokio::test]
    async fn test_list_enriches_every_car_in_order() {
        let mut repository = MockCarRepository::new();
        repository
            .expect_find_all()
            .returning(|| Ok(vec![stored_car(1), stored_car(2), stored_car(3)]));
        let (prices, maps) = healthy_collaborators();

        let cars = service(repository, prices, maps).list().await.unwrap();

        let ids: Vec<_> = cars.iter().map(|car| car.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(cars[2].price.as_deref(), Some("USD 3000.00"));
    }

    #[tokio::test]
    async fn test_list_keeps_order_with_single_slot() {
        let mut repository = MockCarRepository::new();
        repository
            .expect_find_all()
            .returning(|| Ok((1..=5).map(stored_car).collect()));
        let (prices, maps) = healthy_collaborators();

        let cars = service(repository, prices, maps)
            .with_enrichment_concurrency(0)
            .list()
            .await
            .unwrap();

        let ids: Vec<_> = cars.iter().map(|car| car.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
        assert!(cars.iter().all(|car| car.location.address.is_some()));
    }

    #[tokio::test]
    async fn test_save_without_id_creates() {
        let mut repository = MockCarRepository::new();
        repository.expect_create().times(1).returning(|car| {
            let mut created = car.clone();
            created.id = Some(7);
            Ok(created)
        });
        repository.expect_update().never();
        let (prices, maps) = healthy_collaborators();

        let mut car = stored_car(0);
        car.id = None;
        let saved = service(repository, prices, maps).save(car).await.unwrap();

        assert_eq!(saved.id, Some(7));
        assert_eq!(saved.price, None);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_not_found() {
        let mut repository = MockCarRepository::new();
        repository.expect_update().returning(|_, _| Ok(None));
        repository.expect_create().never();
        let (prices, maps) = healthy_collaborators();

        let result = service(repository, prices, maps).save(stored_car(12)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repository = MockCarRepository::new();
        repository.expect_delete().with(eq(4)).returning(|_| Ok(false));
        let (prices, maps) = healthy_collaborators();

        let result = service(repository, prices, maps).delete(4).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_succeeds() {
        let mut repository = MockCarRepository::new();
        repository.expect_delete().with(eq(4)).returning(|_| Ok(true));
        let (prices, maps) = healthy_collaborators();

        assert!(service(repository, prices, maps).delete(4).await.is_ok());
    }
}
