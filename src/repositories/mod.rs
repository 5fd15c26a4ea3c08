//! Repositorios
//!
//! Acceso a PostgreSQL con consultas SQL explícitas.

pub mod car_repository;
pub mod price_repository;

pub use car_repository::{CarRepository, PgCarRepository};
pub use price_repository::{PgPriceRepository, PriceRepository};
