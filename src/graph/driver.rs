//! Driver seam
//!
//! The gateway talks to the database through these traits only. The
//! production implementation lives in `http_driver`; tests substitute an
//! in-memory driver.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use super::record::Record;

/// Errors from the driver layer
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// The database rejected or failed a statement
    #[error("{message}")]
    Database { code: String, message: String },

    /// The database could not be reached
    #[error("transport error: {0}")]
    Transport(String),

    /// The database answered with something we could not interpret
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// One parameterized statement.
///
/// Untrusted request fields only ever enter as bound parameter values,
/// never concatenated into the statement text.
#[derive(Debug, Clone)]
pub struct Statement {
    pub text: String,
    pub parameters: Map<String, Value>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: Map::new(),
        }
    }

    /// Bind a parameter, builder-style
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }
}

/// A handle to a pooled database connection factory.
///
/// Constructed once at startup and injected into the router; there is no
/// module-level singleton.
#[async_trait]
pub trait GraphDriver: Send + Sync {
    /// Borrow one session for the duration of one request
    async fn open_session(&self) -> Result<Box<dyn GraphSession>, GraphError>;
}

/// A request-scoped session. Never shared across requests.
///
/// `close` consumes the session, so the type system rules out running a
/// statement after release and releasing twice.
#[async_trait]
pub trait GraphSession: Send {
    /// Run one statement and collect its result rows
    async fn run(&mut self, statement: &Statement) -> Result<Vec<Record>, GraphError>;

    /// Release the session: commit on `true`, roll back on `false`
    async fn close(self: Box<Self>, commit: bool) -> Result<(), GraphError>;
}
