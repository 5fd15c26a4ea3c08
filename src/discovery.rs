//! Registro en el service registry
//!
//! Hook explícito de arranque/apagado: `main` registra la instancia antes
//! de aceptar tráfico y la da de baja tras el apagado graceful. Sin
//! `REGISTRY_URL` se usa un registro no-op.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::clients::ClientError;
use crate::config::EnvironmentConfig;

#[async_trait]
pub trait ServiceRegistry: Send + Sync {
    async fn register(&self) -> Result<(), ClientError>;

    async fn deregister(&self) -> Result<(), ClientError>;
}

/// Instancia anunciada al registry
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstance {
    pub app: String,
    pub instance_id: String,
    pub host_name: String,
    pub port: u16,
    pub status: String,
}

impl ServiceInstance {
    pub fn new(service_name: &str, host_name: &str, port: u16) -> Self {
        Self {
            app: service_name.to_uppercase(),
            instance_id: format!("{}:{}", service_name, Uuid::new_v4()),
            host_name: host_name.to_string(),
            port,
            status: "UP".to_string(),
        }
    }

    /// Instancia anunciada con el host alcanzable, no con el de escucha
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(&config.service_name, &config.advertised_host, config.port)
    }
}

#[derive(Debug, Serialize)]
struct RegistrationRequest<'a> {
    instance: &'a ServiceInstance,
}

pub struct HttpServiceRegistry {
    client: Client,
    registry_url: String,
    instance: ServiceInstance,
}

impl HttpServiceRegistry {
    pub fn new(registry_url: &str, instance: ServiceInstance) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;

        Ok(Self {
            client,
            registry_url: registry_url.trim_end_matches('/').to_string(),
            instance,
        })
    }

    fn app_url(&self) -> String {
        format!("{}/apps/{}", self.registry_url, self.instance.app)
    }

    fn instance_url(&self) -> String {
        format!("{}/{}", self.app_url(), self.instance.instance_id)
    }
}

#[async_trait]
impl ServiceRegistry for HttpServiceRegistry {
    async fn register(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.app_url())
            .json(&RegistrationRequest { instance: &self.instance })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status().as_u16()));
        }
        info!("📡 Instancia {} registrada en {}", self.instance.instance_id, self.registry_url);
        Ok(())
    }

    async fn deregister(&self) -> Result<(), ClientError> {
        let response = self.client.delete(self.instance_url()).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status().as_u16()));
        }
        info!("📡 Instancia {} dada de baja", self.instance.instance_id);
        Ok(())
    }
}

/// Registro usado cuando no hay registry configurado
#[derive(Debug, Default)]
pub struct NoopRegistry;

#[async_trait]
impl ServiceRegistry for NoopRegistry {
    async fn register(&self) -> Result<(), ClientError> {
        info!("📡 Sin REGISTRY_URL, se omite el registro de la instancia");
        Ok(())
    }

    async fn deregister(&self) -> Result<(), ClientError> {
        Ok(())
    }
}

pub fn registry_from_config(config: &EnvironmentConfig) -> Result<Box<dyn ServiceRegistry>, ClientError> {
    match &config.registry_url {
        Some(url) => {
            Ok(Box::new(HttpServiceRegistry::new(url, ServiceInstance::from_config(config))?))
        }
        None => Ok(Box::new(NoopRegistry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_naming() {
        let instance = ServiceInstance::new("vehicles-api", "localhost", 8080);
        assert_eq!(instance.app, "VEHICLES-API");
        assert!(instance.instance_id.starts_with("vehicles-api:"));
        assert_eq!(instance.status, "UP");
    }

    #[test]
    fn test_instance_uses_advertised_host() {
        let config = EnvironmentConfig {
            service_name: "vehicles-api".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            advertised_host: "vehicles-7f9c".to_string(),
            database_url: "postgres://localhost/vehicles".to_string(),
            pricing_service_url: "http://localhost:8082".to_string(),
            maps_service_url: "http://localhost:9191".to_string(),
            enrichment_timeout: Duration::from_millis(2000),
            enrichment_concurrency: 8,
            registry_url: Some("http://localhost:8761/eureka".to_string()),
            cors_origins: Vec::new(),
        };

        let instance = ServiceInstance::from_config(&config);
        assert_eq!(instance.host_name, "vehicles-7f9c");
        assert_eq!(instance.port, 8080);
    }

    #[test]
    fn test_registry_urls() {
        let instance = ServiceInstance::new("pricing-service", "localhost", 8082);
        let instance_id = instance.instance_id.clone();
        let registry = HttpServiceRegistry::new("http://localhost:8761/eureka/", instance).unwrap();

        assert_eq!(registry.app_url(), "http://localhost:8761/eureka/apps/PRICING-SERVICE");
        assert_eq!(
            registry.instance_url(),
            format!("http://localhost:8761/eureka/apps/PRICING-SERVICE/{}", instance_id)
        );
    }

    #[tokio::test]
    async fn test_noop_registry_always_succeeds() {
        let registry = NoopRegistry;
        assert!(registry.register().await.is_ok());
        assert!(registry.deregister().await.is_ok());
    }
}
