use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};

use vehicles_api::config::{DatabaseConfig, EnvironmentConfig};
use vehicles_api::controllers::PriceController;
use vehicles_api::database::{create_pool, run_migrations};
use vehicles_api::discovery::registry_from_config;
use vehicles_api::repositories::price_repository::{
    PgPriceRepository, CREATE_PRICES_TABLE, CREATE_PRICES_VEHICLE_INDEX,
};
use vehicles_api::routes::create_pricing_app;
use vehicles_api::server::{init_tracing, serve};
use vehicles_api::services::PriceLookupService;
use vehicles_api::state::PricingState;

/// Vehículos con precio generado en una base vacía
const SEEDED_VEHICLES: i64 = 20;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_tracing();

    info!("💰 Pricing Service");
    info!("================================================");

    let config = match EnvironmentConfig::from_env("pricing-service", 8082) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(e.into());
        }
    };

    let pool = create_pool(&DatabaseConfig::new(&config.database_url)).await?;
    run_migrations(&pool, &[CREATE_PRICES_TABLE, CREATE_PRICES_VEHICLE_INDEX]).await?;

    let repository = Arc::new(PgPriceRepository::new(pool));
    let service = Arc::new(PriceLookupService::new(repository));
    service.seed_prices(SEEDED_VEHICLES).await?;

    let app_state = PricingState::new(PriceController::new(service), config.service_name.clone());
    let app = create_pricing_app(app_state, &config.cors_origins);

    info!("🔍 Endpoints disponibles:");
    info!("   GET /health - Health check");
    info!("   GET /services/price?vehicleId=:id - Precio de un vehículo");

    let registry = registry_from_config(&config)?;
    serve(app, config.server_addr()?, registry.as_ref()).await
}
