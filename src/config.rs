//! Gateway configuration
//!
//! Configuration for the HTTP listener and the Neo4j connection. Loaded
//! from an optional JSON file, then overridden by environment variables so
//! credentials never have to live on disk.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Logger;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Neo4j connection settings
    #[serde(default)]
    pub neo4j: Neo4jConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means all origins are permitted.
    /// Permissive CORS is a deliberate simplification for a dev tool.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Neo4j connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neo4jConfig {
    /// Base URI of the Neo4j HTTP endpoint (default: "http://localhost:7474")
    #[serde(default = "default_neo4j_uri")]
    pub uri: String,

    /// Database name (default: "neo4j")
    #[serde(default = "default_database")]
    pub database: String,

    /// Username (default: "neo4j")
    #[serde(default = "default_username")]
    pub username: String,

    /// Password; expected to come from NEO4J_PASSWORD in most setups
    #[serde(default)]
    pub password: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_neo4j_uri() -> String {
    "http://localhost:7474".to_string()
}

fn default_database() -> String {
    "neo4j".to_string()
}

fn default_username() -> String {
    "neo4j".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: default_neo4j_uri(),
            database: default_database(),
            username: default_username(),
            password: String::new(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            neo4j: Neo4jConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from an optional file path, then apply
    /// environment overrides. A missing path yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Environment overrides: NEO4J_URI, NEO4J_DATABASE, NEO4J_USERNAME,
    /// NEO4J_PASSWORD, GATEWAY_PORT
    fn apply_env(&mut self) {
        if let Ok(uri) = std::env::var("NEO4J_URI") {
            self.neo4j.uri = uri;
        }
        if let Ok(database) = std::env::var("NEO4J_DATABASE") {
            self.neo4j.database = database;
        }
        if let Ok(username) = std::env::var("NEO4J_USERNAME") {
            self.neo4j.username = username;
        }
        if let Ok(password) = std::env::var("NEO4J_PASSWORD") {
            self.neo4j.password = password;
        }
        if let Ok(port) = std::env::var("GATEWAY_PORT") {
            match port.parse() {
                Ok(port) => self.http.port = port,
                Err(_) => Logger::warn("invalid_gateway_port", &[("value", &port)]),
            }
        }
    }

    /// Get the socket address string for the HTTP listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}
