//! Price store
//!
//! Filas `vehicle_id -> price`. El pricing-service es el único dueño
//! de esta tabla.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::models::price::Price;

pub const CREATE_PRICES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS prices (
    id BIGSERIAL PRIMARY KEY,
    vehicle_id BIGINT NOT NULL,
    price NUMERIC(12, 2) NOT NULL,
    currency TEXT NOT NULL
)
"#;

pub const CREATE_PRICES_VEHICLE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_prices_vehicle_id ON prices (vehicle_id)";

#[automock]
#[async_trait]
pub trait PriceRepository: Send + Sync {
    /// Precio de un vehículo. Con varias filas gana la de menor id.
    async fn find_by_vehicle_id(&self, vehicle_id: i64) -> Result<Option<Price>, sqlx::Error>;

    async fn count(&self) -> Result<i64, sqlx::Error>;

    async fn create(&self, price: &Price) -> Result<Price, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgPriceRepository {
    pool: PgPool,
}

impl PgPriceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceRepository for PgPriceRepository {
    async fn find_by_vehicle_id(&self, vehicle_id: i64) -> Result<Option<Price>, sqlx::Error> {
        sqlx::query_as::<_, Price>(
            "SELECT id, vehicle_id, price, currency FROM prices WHERE vehicle_id = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prices")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn create(&self, price: &Price) -> Result<Price, sqlx::Error> {
        sqlx::query_as::<_, Price>(
            r#"
            INSERT INTO prices (vehicle_id, price, currency)
            VALUES ($1, $2, $3)
            RETURNING id, vehicle_id, price, currency
            "#,
        )
        .bind(price.vehicle_id)
        .bind(price.price)
        .bind(&price.currency)
        .fetch_one(&self.pool)
        .await
    }
}
