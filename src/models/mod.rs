//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean
//! al schema PostgreSQL.

pub mod car;
pub mod price;

pub use car::{Car, Condition, Details, Location, Manufacturer};
pub use price::Price;
