//! HTTP server assembly
//!
//! Builds the router around an injected driver handle, applies CORS, and
//! runs the listener until ctrl-c.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::GatewayConfig;
use crate::graph::GraphDriver;
use crate::observability::Logger;
use crate::routes::{gateway_routes, AppState};

/// The gateway HTTP server
pub struct GatewayServer {
    config: GatewayConfig,
    router: Router,
}

impl GatewayServer {
    /// Assemble the server around a driver handle.
    ///
    /// The driver is the one process-wide resource; constructing it here
    /// and threading it through the router keeps its lifecycle explicit.
    pub fn new(config: GatewayConfig, driver: Arc<dyn GraphDriver>) -> Self {
        let state = Arc::new(AppState { driver });

        let cors = if config.http.cors_origins.is_empty() {
            // No origins configured: permissive, for dev use
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .http
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let router = gateway_routes(state).layer(cors);

        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", self.config.socket_addr()),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info(
            "server_started",
            &[
                ("addr", &addr.to_string()),
                ("neo4j_uri", &self.config.neo4j.uri),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("server_stopped", &[]);
        Ok(())
    }
}

async fn shutdown_signal() {
    // In-flight sessions finish their request; the driver's pool drops with
    // the process.
    let _ = tokio::signal::ctrl_c().await;
}
