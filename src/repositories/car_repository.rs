use async_trait::async_trait;
use chrono::Utc;
use mockall::automock;
use sqlx::PgPool;

use crate::models::car::Car;
use crate::utils::errors::AppError;

pub const CREATE_CARS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cars (
    id BIGSERIAL PRIMARY KEY,
    condition TEXT NOT NULL,
    body TEXT NOT NULL,
    model TEXT NOT NULL,
    manufacturer_code INTEGER NOT NULL,
    manufacturer_name TEXT NOT NULL,
    number_of_doors INTEGER,
    fuel_type TEXT,
    engine TEXT,
    mileage INTEGER,
    model_year INTEGER,
    production_year INTEGER,
    external_color TEXT,
    lat DOUBLE PRECISION NOT NULL,
    lon DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    modified_at TIMESTAMPTZ NOT NULL
)
"#;

/// Persistencia de los registros Car
#[automock]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Inserta un car nuevo y devuelve la fila con id y timestamps asignados
    async fn create(&self, car: &Car) -> Result<Car, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError>;

    /// Todos los cars, ordenados por id
    async fn find_all(&self) -> Result<Vec<Car>, AppError>;

    /// Reemplaza condición, detalles y ubicación. `None` si el id no existe.
    async fn update(&self, id: i64, car: &Car) -> Result<Option<Car>, AppError>;

    /// Borrado físico. `false` si el id no existe.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create(&self, car: &Car) -> Result<Car, AppError> {
        let now = Utc::now();
        let details = &car.details;

        let created = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (
                condition, body, model, manufacturer_code, manufacturer_name,
                number_of_doors, fuel_type, engine, mileage, model_year,
                production_year, external_color, lat, lon, created_at, modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
            RETURNING *
            "#,
        )
        .bind(car.condition.as_str())
        .bind(&details.body)
        .bind(&details.model)
        .bind(details.manufacturer.code)
        .bind(&details.manufacturer.name)
        .bind(details.number_of_doors)
        .bind(&details.fuel_type)
        .bind(&details.engine)
        .bind(details.mileage)
        .bind(details.model_year)
        .bind(details.production_year)
        .bind(&details.external_color)
        .bind(car.location.lat)
        .bind(car.location.lon)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    async fn update(&self, id: i64, car: &Car) -> Result<Option<Car>, AppError> {
        let details = &car.details;

        let updated = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET condition = $2, body = $3, model = $4, manufacturer_code = $5,
                manufacturer_name = $6, number_of_doors = $7, fuel_type = $8,
                engine = $9, mileage = $10, model_year = $11, production_year = $12,
                external_color = $13, lat = $14, lon = $15, modified_at = $16
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car.condition.as_str())
        .bind(&details.body)
        .bind(&details.model)
        .bind(details.manufacturer.code)
        .bind(&details.manufacturer.name)
        .bind(details.number_of_doors)
        .bind(&details.fuel_type)
        .bind(&details.engine)
        .bind(details.mileage)
        .bind(details.model_year)
        .bind(details.production_year)
        .bind(&details.external_color)
        .bind(car.location.lat)
        .bind(car.location.lon)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
