//! Gateway HTTP routes
//!
//! Each handler binds request input as statement parameters, hands a fixed
//! batch to the session-scoped executor, and projects the resulting records
//! through that endpoint's field map.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::GatewayError;
use crate::executor::run_batch;
use crate::graph::{GraphDriver, Record, Statement};
use crate::normalize::{empty_object, normalize, normalize_all};
use crate::queries;

// ==================
// Shared State
// ==================

/// Router state: the injected driver handle
pub struct AppState {
    pub driver: Arc<dyn GraphDriver>,
}

// ==================
// Extractors
// ==================

/// JSON body extractor whose rejection keeps the `{error}` body shape.
///
/// Axum's stock `Json` rejection answers malformed bodies with plain text;
/// every gateway failure must carry the standard JSON error body instead.
pub struct GatewayJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for GatewayJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(GatewayJson(value)),
            Err(rejection) => Err(GatewayError::InvalidBody(rejection.body_text())),
        }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct RunCypherRequest {
    /// Election type; defaults to the fixed category when omitted
    #[serde(rename = "type")]
    pub election_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DropProjectionRequest {
    #[serde(default)]
    pub projection: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ==================
// Router
// ==================

/// Create the gateway routes
pub fn gateway_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/run-cypher", post(run_cypher_handler))
        .route("/candidate-predictions", get(candidate_predictions_handler))
        .route("/candidates", get(candidates_handler))
        .route("/betweenness", get(betweenness_handler))
        .route("/project-components-graph", get(project_components_handler))
        .route("/wcc-components", get(wcc_components_handler))
        .route("/dropprojection", post(drop_projection_handler))
        .route("/node-count", get(node_count_handler))
        .route("/total-nodes", get(total_nodes_handler))
        .route("/total-relationships", get(total_relationships_handler))
        .route("/isolated-nodes", get(isolated_nodes_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Rows of the last completed statement, as response objects
fn last_batch_rows(batches: &[Vec<Record>], fields: &[(&str, &str)]) -> Vec<Value> {
    let records = batches.last().map(Vec::as_slice).unwrap_or(&[]);
    normalize_all(records, fields)
}

/// First row of the last completed statement as a single response object.
/// A result with no rows still answers with every field present (null).
fn last_batch_object(batches: &[Vec<Record>], fields: &[(&str, &str)]) -> Value {
    match batches.last().and_then(|records| records.first()) {
        Some(record) => Value::Object(normalize(record, fields)),
        None => Value::Object(empty_object(fields)),
    }
}

// ==================
// Handlers
// ==================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn run_cypher_handler(
    State(state): State<Arc<AppState>>,
    GatewayJson(request): GatewayJson<RunCypherRequest>,
) -> Result<Json<Value>, GatewayError> {
    let election_type = request
        .election_type
        .unwrap_or_else(|| queries::DEFAULT_ELECTION_TYPE.to_string());

    let statement = Statement::new(queries::ELECTION_VOTES).param("type", election_type);
    let batches = run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(Value::Array(last_batch_rows(
        &batches,
        queries::ELECTION_VOTES_FIELDS,
    ))))
}

async fn candidate_predictions_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    let statement = Statement::new(queries::CANDIDATE_PREDICTIONS)
        .param("graph", queries::FULL_GRAPH)
        .param("model", queries::LINK_PREDICTION_MODEL)
        .param("topN", queries::LINK_PREDICTION_TOP_N);
    let batches = run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(Value::Array(last_batch_rows(
        &batches,
        queries::PREDICTION_FIELDS,
    ))))
}

async fn candidates_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    // The degree stream depends on the projection created by the first
    // statement, so both must run in order within one session.
    let statements = vec![
        Statement::new(queries::PROJECT_IF_ABSENT)
            .param("name", queries::CANDIDATE_ELECTION_GRAPH)
            .param("nodes", json!(["Candidate", "Election"]))
            .param("rels", json!(["PARTICIPATED_IN"])),
        Statement::new(queries::DEGREE_STREAM).param("graph", queries::CANDIDATE_ELECTION_GRAPH),
    ];
    let batches = run_batch(state.driver.as_ref(), statements).await?;

    Ok(Json(Value::Array(last_batch_rows(
        &batches,
        queries::SCORE_FIELDS,
    ))))
}

async fn betweenness_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    let statements = vec![
        Statement::new(queries::PROJECT_IF_ABSENT)
            .param("name", queries::BETWEEN_GRAPH)
            .param("nodes", json!(["Candidate"]))
            .param("rels", json!(["PARTICIPATED_TOGETHER"])),
        Statement::new(queries::BETWEENNESS_STREAM).param("graph", queries::BETWEEN_GRAPH),
    ];
    let batches = run_batch(state.driver.as_ref(), statements).await?;

    Ok(Json(Value::Array(last_batch_rows(
        &batches,
        queries::SCORE_FIELDS,
    ))))
}

async fn project_components_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let statement = Statement::new(queries::PROJECT_IF_ABSENT)
        .param("name", queries::COMPONENTS_GRAPH)
        .param("nodes", json!(["Candidate"]))
        .param(
            "rels",
            json!({
                "PARTICIPATED_TOGETHER": {
                    "type": "PARTICIPATED_TOGETHER",
                    "orientation": "UNDIRECTED",
                }
            }),
        );
    run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(MessageResponse {
        message: format!("{} projection ready", queries::COMPONENTS_GRAPH),
    }))
}

async fn wcc_components_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    let statement = Statement::new(queries::WCC_STREAM).param("graph", queries::COMPONENTS_GRAPH);
    let batches = run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(Value::Array(last_batch_rows(
        &batches,
        queries::WCC_FIELDS,
    ))))
}

async fn drop_projection_handler(
    State(state): State<Arc<AppState>>,
    GatewayJson(request): GatewayJson<DropProjectionRequest>,
) -> Result<&'static str, GatewayError> {
    let projection = match request.projection {
        Some(name) if !name.is_empty() => name,
        _ => return Err(GatewayError::MissingParam("projection".to_string())),
    };

    let statement = Statement::new(queries::DROP_PROJECTION).param("projection", projection);
    run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok("Projection dropped")
}

async fn node_count_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    let statement = Statement::new(queries::NODE_COUNT);
    let batches = run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(Value::Array(last_batch_rows(
        &batches,
        queries::NODE_COUNT_FIELDS,
    ))))
}

async fn total_nodes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    let statement = Statement::new(queries::TOTAL_NODES);
    let batches = run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(last_batch_object(&batches, queries::TOTAL_NODES_FIELDS)))
}

async fn total_relationships_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    let statement = Statement::new(queries::TOTAL_RELATIONSHIPS);
    let batches = run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(last_batch_object(
        &batches,
        queries::TOTAL_RELATIONSHIPS_FIELDS,
    )))
}

async fn isolated_nodes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, GatewayError> {
    let statement = Statement::new(queries::ISOLATED_NODES);
    let batches = run_batch(state.driver.as_ref(), vec![statement]).await?;

    Ok(Json(last_batch_object(
        &batches,
        queries::ISOLATED_NODES_FIELDS,
    )))
}
