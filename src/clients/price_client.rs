//! Cliente HTTP del pricing-service
//!
//! Resuelve el precio de un vehículo consultando
//! `GET {base_url}/services/price?vehicleId={id}`.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use super::ClientError;
use crate::models::price::Price;

#[automock]
#[async_trait]
pub trait PriceClient: Send + Sync {
    /// Precio formateado (`"USD 15432.10"`) del vehículo
    async fn get_price(&self, vehicle_id: i64) -> Result<String, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpPriceClient {
    client: Client,
    base_url: String,
}

impl HttpPriceClient {
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

    fn price_url(&self) -> String {
        format!("{}/services/price", self.base_url)
    }
}

#[async_trait]
impl PriceClient for HttpPriceClient {
    async fn get_price(&self, vehicle_id: i64) -> Result<String, ClientError> {
        debug!("💰 Consultando precio del vehículo {}", vehicle_id);

        let response = self
            .client
            .get(self.price_url())
            .query(&[("vehicleId", vehicle_id)])
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let price: Price = response.json().await?;
                Ok(price.display())
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(format!("price for vehicle {}", vehicle_id))),
            status => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }
}
