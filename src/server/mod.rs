/*!
 * HTTP binding of the language service.
 *
 * The server owns nothing but plumbing: it builds the shared state, wires
 * the routes, and hands requests to the service and the batch pipeline.
 */

pub mod handlers;
pub mod routes;
pub mod types;

pub use types::AppState;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use log::info;
use tower_http::cors::CorsLayer;

use crate::app_config::ServerConfig;
use crate::language_service::LanguageService;

/// The HTTP API server
pub struct ApiServer {
    config: ServerConfig,
    service: LanguageService,
}

impl ApiServer {
    /// Create a new server around an assembled service
    pub fn new(config: ServerConfig, service: LanguageService) -> Self {
        Self { config, service }
    }

    /// Bind the listener and serve requests until shutdown
    pub async fn start(&self) -> Result<()> {
        let state = Arc::new(AppState {
            service: self.service.clone(),
        });

        let app = Self::create_router(state);

        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind server to {}", addr))?;

        info!("Server listening on http://{}", addr);

        axum::serve(listener, app)
            .await
            .context("Server error")?;

        Ok(())
    }

    /// Assemble the router with shared state and middleware
    fn create_router(state: Arc<AppState>) -> Router {
        routes::create_routes()
            .with_state(state)
            .layer(CorsLayer::permissive())
    }
}
