//! CLI entry: argument parsing, config loading, server startup

mod args;

pub use args::Cli;

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigError, GatewayConfig};
use crate::graph::{GraphDriver, HttpGraphDriver};
use crate::observability::Logger;
use crate::server::GatewayServer;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Parse arguments, load configuration, and run the server to completion
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse_args();

    let mut config = GatewayConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.http.port = port;
    }
    Logger::info(
        "config_loaded",
        &[
            ("addr", &config.socket_addr()),
            ("neo4j_uri", &config.neo4j.uri),
            ("neo4j_database", &config.neo4j.database),
        ],
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let driver: Arc<dyn GraphDriver> = Arc::new(HttpGraphDriver::new(&config.neo4j));
        GatewayServer::new(config, driver).start().await
    })?;

    Ok(())
}
