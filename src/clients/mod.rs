//! Clients - HTTP Clients for collaborating services
//!
//! This module contains the HTTP clients for the pricing service and
//! the maps service used to enrich car reads.

pub mod maps_client;
pub mod price_client;

use thiserror::Error;

pub use maps_client::{Address, HttpMapsClient, MapsClient};
pub use price_client::{HttpPriceClient, PriceClient};

/// Fallos de un colaborador remoto
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),
}
