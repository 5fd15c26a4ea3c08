//! Cliente HTTP del servicio de mapas
//!
//! Traduce coordenadas a una dirección legible:
//! `GET {base_url}/maps?lat={lat}&lon={lon}`.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::ClientError;
use crate::models::car::Location;

/// Dirección devuelta por el servicio de mapas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    /// Copia la dirección sobre una ubicación, conservando lat/lon
    pub fn apply_to(self, location: &mut Location) {
        location.address = Some(self.address);
        location.city = Some(self.city);
        location.state = Some(self.state);
        location.zip = Some(self.zip);
    }
}

#[automock]
#[async_trait]
pub trait MapsClient: Send + Sync {
    async fn get_address(&self, lat: f64, lon: f64) -> Result<Address, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpMapsClient {
    client: Client,
    base_url: String,
}

impl HttpMapsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("VehiclesApi/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MapsClient for HttpMapsClient {
    async fn get_address(&self, lat: f64, lon: f64) -> Result<Address, ClientError> {
        debug!("🗺️ Resolviendo dirección para ({}, {})", lat, lon);

        let response = self
            .client
            .get(format!("{}/maps", self.base_url))
            .query(&[("lat", lat), ("lon", lon)])
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<Address>().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(format!("address for ({}, {})", lat, lon))),
            status => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }
}
