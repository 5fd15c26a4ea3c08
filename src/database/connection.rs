//! Configuración de conexión a PostgreSQL
//!
//! Este módulo crea el pool y aplica el schema de cada servicio.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));
    let pool = config.create_pool().await?;
    info!("✅ PostgreSQL conectado exitosamente");
    Ok(pool)
}

/// Ejecutar las sentencias del schema (idempotentes, `IF NOT EXISTS`)
pub async fn run_migrations(pool: &PgPool, statements: &[&str]) -> Result<(), sqlx::Error> {
    for statement in statements {
        sqlx::query(*statement).execute(pool).await?;
    }
    info!("📦 Schema aplicado ({} sentencias)", statements.len());
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    if at_pos < scheme_end {
        return url.to_string();
    }

    let protocol = url.get(..scheme_end + 3).unwrap_or_default();
    let host = url.get(at_pos + 1..).unwrap_or_default();
    format!("{}***:***@{}", protocol, host)
}
