use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};

use vehicles_api::clients::{HttpMapsClient, HttpPriceClient};
use vehicles_api::config::{DatabaseConfig, EnvironmentConfig};
use vehicles_api::controllers::CarController;
use vehicles_api::database::{create_pool, run_migrations};
use vehicles_api::discovery::registry_from_config;
use vehicles_api::repositories::car_repository::{PgCarRepository, CREATE_CARS_TABLE};
use vehicles_api::routes::create_vehicles_app;
use vehicles_api::server::{init_tracing, serve};
use vehicles_api::services::DefaultCarService;
use vehicles_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    init_tracing();

    info!("🚗 Vehicles API");
    info!("================================================");

    let config = match EnvironmentConfig::from_env("vehicles-api", 8080) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(e.into());
        }
    };

    // Inicializar base de datos
    let pool = create_pool(&DatabaseConfig::new(&config.database_url)).await?;
    run_migrations(&pool, &[CREATE_CARS_TABLE]).await?;

    // Composición explícita: repositorio + clientes -> servicio -> controller
    let repository = Arc::new(PgCarRepository::new(pool));
    let prices = Arc::new(HttpPriceClient::new(&config.pricing_service_url, config.enrichment_timeout)?);
    let maps = Arc::new(HttpMapsClient::new(&config.maps_service_url, config.enrichment_timeout)?);
    let service = Arc::new(
        DefaultCarService::new(repository, prices, maps)
            .with_enrichment_concurrency(config.enrichment_concurrency),
    );
    let controller = CarController::new(service);

    let app_state = AppState::new(controller, config.service_name.clone());
    let app = create_vehicles_app(app_state, &config.cors_origins);

    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   POST   /cars - Crear vehículo");
    info!("   GET    /cars - Listar vehículos");
    info!("   GET    /cars/:id - Obtener vehículo");
    info!("   PUT    /cars/:id - Actualizar vehículo");
    info!("   DELETE /cars/:id - Eliminar vehículo");
    info!("💰 Pricing service: {}", config.pricing_service_url);
    info!("🗺️ Maps service: {}", config.maps_service_url);

    let registry = registry_from_config(&config)?;
    serve(app, config.server_addr()?, registry.as_ref()).await
}
