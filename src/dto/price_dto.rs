use serde::{Deserialize, Serialize};

// Query del pricing-service: `/services/price?vehicleId=1`
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub vehicle_id: i64,
}
