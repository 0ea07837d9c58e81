//! Neo4j HTTP transactional-API driver
//!
//! Sessions map onto server-side transactions: `POST /db/{db}/tx` opens
//! one, `POST /db/{db}/tx/{id}` runs a statement in it, and the commit and
//! rollback endpoints release it. The reqwest client's connection pool is
//! the one process-wide shared resource; it is owned here and dropped at
//! shutdown.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Neo4jConfig;

use super::driver::{GraphDriver, GraphError, GraphSession, Statement};
use super::record::Record;
use super::value::DbValue;

impl From<reqwest::Error> for GraphError {
    fn from(err: reqwest::Error) -> Self {
        GraphError::Transport(err.to_string())
    }
}

/// Production driver over the Neo4j HTTP transactional API
pub struct HttpGraphDriver {
    client: Client,
    tx_endpoint: String,
    auth_header: String,
}

impl HttpGraphDriver {
    pub fn new(config: &Neo4jConfig) -> Self {
        let credentials = format!("{}:{}", config.username, config.password);
        Self {
            client: Client::new(),
            tx_endpoint: format!(
                "{}/db/{}/tx",
                config.uri.trim_end_matches('/'),
                config.database
            ),
            auth_header: format!("Basic {}", STANDARD.encode(credentials)),
        }
    }
}

#[async_trait]
impl GraphDriver for HttpGraphDriver {
    async fn open_session(&self) -> Result<Box<dyn GraphSession>, GraphError> {
        let response = self
            .client
            .post(&self.tx_endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .json(&json!({ "statements": [] }))
            .send()
            .await?;

        let tx_url = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                GraphError::Protocol("transaction endpoint returned no location".to_string())
            })?;

        let payload: TxResponse = response.json().await?;
        fail_on_errors(&payload)?;

        Ok(Box::new(HttpGraphSession {
            client: self.client.clone(),
            auth_header: self.auth_header.clone(),
            tx_url,
        }))
    }
}

struct HttpGraphSession {
    client: Client,
    auth_header: String,
    tx_url: String,
}

#[async_trait]
impl GraphSession for HttpGraphSession {
    async fn run(&mut self, statement: &Statement) -> Result<Vec<Record>, GraphError> {
        let body = json!({
            "statements": [{
                "statement": statement.text,
                "parameters": statement.parameters,
            }]
        });

        let payload: TxResponse = self
            .client
            .post(&self.tx_url)
            .header(AUTHORIZATION, &self.auth_header)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        fail_on_errors(&payload)?;

        let result = payload
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GraphError::Protocol("response carried no result set".to_string()))?;

        let columns: Arc<[String]> = result.columns.into();
        Ok(result
            .data
            .into_iter()
            .map(|row| {
                let values = row.row.into_iter().map(DbValue::from_json).collect();
                Record::new(columns.clone(), values)
            })
            .collect())
    }

    async fn close(self: Box<Self>, commit: bool) -> Result<(), GraphError> {
        if commit {
            let payload: TxResponse = self
                .client
                .post(format!("{}/commit", self.tx_url))
                .header(AUTHORIZATION, &self.auth_header)
                .json(&json!({ "statements": [] }))
                .send()
                .await?
                .json()
                .await?;
            fail_on_errors(&payload)
        } else {
            // A failed statement already rolled the transaction back server
            // side; the DELETE then answers 404, which still means released.
            self.client
                .delete(&self.tx_url)
                .header(AUTHORIZATION, &self.auth_header)
                .send()
                .await?;
            Ok(())
        }
    }
}

// Wire shapes of the transactional API

#[derive(Debug, Deserialize)]
struct TxResponse {
    #[serde(default)]
    results: Vec<TxResult>,
    #[serde(default)]
    errors: Vec<TxError>,
}

#[derive(Debug, Deserialize)]
struct TxResult {
    columns: Vec<String>,
    #[serde(default)]
    data: Vec<TxRow>,
}

#[derive(Debug, Deserialize)]
struct TxRow {
    #[serde(default)]
    row: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct TxError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

fn fail_on_errors(payload: &TxResponse) -> Result<(), GraphError> {
    match payload.errors.first() {
        Some(err) => Err(GraphError::Database {
            code: err.code.clone(),
            message: err.message.clone(),
        }),
        None => Ok(()),
    }
}
