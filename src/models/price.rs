//! Modelo de Price
//!
//! Una fila de precio por vehículo, propiedad del pricing-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(skip)]
    pub id: i64,
    pub vehicle_id: i64,
    pub price: Decimal,
    pub currency: String,
}

impl Price {
    pub fn new(vehicle_id: i64, price: Decimal, currency: impl Into<String>) -> Self {
        Self {
            id: 0,
            vehicle_id,
            price,
            currency: currency.into(),
        }
    }

    /// Precio listo para mostrar: `"USD 15432.10"`
    pub fn display(&self) -> String {
        let mut amount = self.price.round_dp(2);
        amount.rescale(2);
        format!("{} {}", self.currency, amount)
    }
}
