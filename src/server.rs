//! Arranque y apagado graceful compartidos por ambos binarios

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use crate::discovery::ServiceRegistry;

/// Sirve `app` en `addr` hasta recibir Ctrl+C / SIGTERM, registrando la
/// instancia antes de escuchar y dándola de baja al terminar.
pub async fn serve(app: Router, addr: SocketAddr, registry: &dyn ServiceRegistry) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Servidor iniciando en http://{}", addr);

    // Un registry caído no impide arrancar
    if let Err(e) = registry.register().await {
        warn!("⚠️ No se pudo registrar la instancia: {}", e);
    }

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = registry.deregister().await {
        warn!("⚠️ No se pudo dar de baja la instancia: {}", e);
    }

    if let Err(e) = &result {
        error!("❌ Error del servidor: {}", e);
    }
    result?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

/// Inicializa el subscriber de tracing (`RUST_LOG`, por defecto `info`)
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
