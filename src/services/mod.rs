//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación:
//! la orquestación de cars y la consulta de precios.

pub mod car_service;
pub mod price_service;

pub use car_service::{CarService, DefaultCarService, PRICE_UNAVAILABLE};
pub use price_service::{PriceLookupError, PriceLookupService};
