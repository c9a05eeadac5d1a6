//! Server assembly: combined router, CORS layer, bind and serve.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::data::model::TradeDataset;

use super::config::HttpServerConfig;
use super::routes::{dashboard_routes, health_routes, DashboardState};

/// HTTP server for the trade dashboard.
pub struct DashboardServer {
    config: HttpServerConfig,
    router: Router,
}

impl DashboardServer {
    /// Create a server with default configuration.
    pub fn new(dataset: TradeDataset) -> Self {
        Self::with_config(dataset, HttpServerConfig::default())
    }

    /// Create a server with custom configuration.
    pub fn with_config(dataset: TradeDataset, config: HttpServerConfig) -> Self {
        let router = Self::build_router(dataset);
        Self { config, router }
    }

    /// Build the combined router over the shared read-only dataset.
    fn build_router(dataset: TradeDataset) -> Router {
        let state = Arc::new(DashboardState { dataset });

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes())
            .merge(dashboard_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until shutdown.
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .with_context(|| format!("invalid socket address {}", self.config.socket_addr()))?;

        log::info!("dashboard listening on http://{addr}");

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        axum::serve(listener, self.router)
            .await
            .context("serving HTTP")?;

        Ok(())
    }
}
