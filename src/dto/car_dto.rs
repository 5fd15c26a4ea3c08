use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::{Car, Condition, Details, Location};
use crate::utils::errors::AppError;

pub const CARS_PATH: &str = "/cars";

// Request para crear o reemplazar un vehículo (el id nunca viene del cliente)
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarRequest {
    pub condition: Condition,
    #[validate]
    pub details: Details,
    #[validate]
    pub location: Location,
}

impl From<CarRequest> for Car {
    fn from(request: CarRequest) -> Self {
        // Sólo lat/lon viajan al repositorio; la dirección se resuelve al leer
        let location = Location::new(request.location.lat, request.location.lon);
        Car::new(request.condition, request.details, location)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub cars: Link,
}

// Response de vehículo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub condition: Condition,
    pub details: Details,
    pub location: Location,
    pub price: Option<String>,
    #[serde(rename = "_links")]
    pub links: CarLinks,
}

impl CarResponse {
    pub fn resource_path(id: i64) -> String {
        format!("{}/{}", CARS_PATH, id)
    }
}

impl TryFrom<Car> for CarResponse {
    type Error = AppError;

    fn try_from(car: Car) -> Result<Self, Self::Error> {
        let id = car
            .id
            .ok_or_else(|| AppError::Internal("car returned by the service has no id".to_string()))?;

        Ok(Self {
            id,
            created_at: car.created_at,
            modified_at: car.modified_at,
            condition: car.condition,
            details: car.details,
            location: car.location,
            price: car.price,
            links: CarLinks {
                self_link: Link::new(Self::resource_path(id)),
                cars: Link::new(CARS_PATH),
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedCars {
    pub car_list: Vec<CarResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

// Colección de vehículos (`_embedded.carList`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarCollectionResponse {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedCars,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
}

impl CarCollectionResponse {
    pub fn new(cars: Vec<CarResponse>) -> Self {
        Self {
            embedded: EmbeddedCars { car_list: cars },
            links: CollectionLinks {
                self_link: Link::new(CARS_PATH),
            },
        }
    }
}
