use std::sync::Arc;

use crate::dto::car_dto::{CarCollectionResponse, CarRequest, CarResponse};
use crate::models::car::Car;
use crate::services::car_service::CarService;
use crate::utils::errors::AppError;

pub struct CarController {
    service: Arc<dyn CarService>,
}

impl CarController {
    pub fn new(service: Arc<dyn CarService>) -> Self {
        Self { service }
    }

    pub async fn list(&self) -> Result<CarCollectionResponse, AppError> {
        let cars = self.service.list().await?;

        let response = cars
            .into_iter()
            .map(CarResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CarCollectionResponse::new(response))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CarResponse, AppError> {
        let car = self.service.find_by_id(id).await?;
        CarResponse::try_from(car)
    }

    pub async fn create(&self, request: CarRequest) -> Result<CarResponse, AppError> {
        let car = self.service.save(Car::from(request)).await?;
        CarResponse::try_from(car)
    }

    pub async fn update(&self, id: i64, request: CarRequest) -> Result<CarResponse, AppError> {
        let mut car = Car::from(request);
        car.id = Some(id);

        let car = self.service.save(car).await?;
        CarResponse::try_from(car)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.service.delete(id).await
    }
}
