//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración de cada servicio desde el entorno
//! (previamente cargado desde `.env` con dotenvy).

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub service_name: String,
    pub host: String,
    pub port: u16,
    /// Host anunciado al service registry
    pub advertised_host: String,
    pub database_url: String,
    pub pricing_service_url: String,
    pub maps_service_url: String,
    pub enrichment_timeout: Duration,
    pub enrichment_concurrency: usize,
    pub registry_url: Option<String>,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Lee la configuración del entorno. `default_service` y `default_port`
    /// permiten que cada binario tenga sus propios valores por defecto.
    pub fn from_env(default_service: &str, default_port: u16) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok(), default_service, default_port)
    }

    fn from_lookup<F>(lookup: F, default_service: &str, default_port: u16) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => default_port,
        };

        let enrichment_timeout_ms: u64 = match lookup("ENRICHMENT_TIMEOUT_MS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "ENRICHMENT_TIMEOUT_MS",
                value,
            })?,
            None => 2000,
        };

        let enrichment_concurrency: usize = match lookup("ENRICHMENT_CONCURRENCY") {
            Some(value) => match value.parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "ENRICHMENT_CONCURRENCY",
                        value,
                    })
                }
            },
            None => 8,
        };

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let advertised_host = lookup("ADVERTISED_HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| advertised_fallback(&host, lookup("HOSTNAME")));

        Ok(Self {
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| default_service.to_string()),
            host,
            port,
            advertised_host,
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            pricing_service_url: lookup("PRICING_SERVICE_URL")
                .unwrap_or_else(|| "http://localhost:8082".to_string()),
            maps_service_url: lookup("MAPS_SERVICE_URL")
                .unwrap_or_else(|| "http://localhost:9191".to_string()),
            enrichment_timeout: Duration::from_millis(enrichment_timeout_ms),
            enrichment_concurrency,
            registry_url: lookup("REGISTRY_URL").filter(|url| !url.trim().is_empty()),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Dirección de escucha del servidor
    pub fn server_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ConfigError::Invalid { name: "HOST", value: addr })
    }
}

/// Un host de escucha comodín (`0.0.0.0`, `::`) no es alcanzable desde
/// otros servicios: se anuncia el hostname de la máquina o `localhost`.
fn advertised_fallback(host: &str, hostname: Option<String>) -> String {
    let unspecified = host
        .parse::<IpAddr>()
        .map(|ip| ip.is_unspecified())
        .unwrap_or(false);

    if !unspecified {
        return host.to_string();
    }
    hostname
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}
