use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::gateway::Gateway;
use crate::handler::SharedGateway;
use crate::router::build_router;

/// HTLC envelope server.
pub struct HtlcServer {
    config: ServerConfig,
    gateway: SharedGateway,
}

impl HtlcServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_gateway(config, Arc::new(Gateway::new()))
    }

    pub fn with_gateway(config: ServerConfig, gateway: SharedGateway) -> Self {
        Self { config, gateway }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn gateway(&self) -> &SharedGateway {
        &self.gateway
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let router = build_router(Arc::clone(&self.gateway));
        if self.config.allow_cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Serve until Ctrl-C or SIGTERM.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("HTLC server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("HTLC server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down gracefully");
}
