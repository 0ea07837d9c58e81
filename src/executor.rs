//! Session-scoped batch executor
//!
//! Runs an ordered batch of statements against exactly one session and
//! releases that session on every exit path. A statement failure aborts the
//! rest of the batch; nothing is retried. A release failure after a run
//! failure is logged with both messages so the original error is never
//! masked.

use crate::error::GatewayError;
use crate::graph::{GraphDriver, GraphError, Record, Statement};
use crate::observability::Logger;

/// Execute statements in submission order within one session.
///
/// Returns one record batch per completed statement. On failure the session
/// is rolled back and the first error propagates as an Execution error.
pub async fn run_batch(
    driver: &dyn GraphDriver,
    statements: Vec<Statement>,
) -> Result<Vec<Vec<Record>>, GatewayError> {
    let mut session = driver.open_session().await.map_err(execution_error)?;

    let mut results = Vec::with_capacity(statements.len());
    let mut failure: Option<GraphError> = None;

    for statement in &statements {
        match session.run(statement).await {
            Ok(records) => results.push(records),
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    // Exactly one release, on success and on failure alike
    let close_result = session.close(failure.is_none()).await;

    match failure {
        Some(run_err) => {
            if let Err(close_err) = close_result {
                let run_msg = run_err.to_string();
                let close_msg = close_err.to_string();
                Logger::warn(
                    "session_close_failed",
                    &[("close_error", &close_msg), ("run_error", &run_msg)],
                );
            }
            Err(execution_error(run_err))
        }
        None => {
            close_result.map_err(execution_error)?;
            Ok(results)
        }
    }
}

fn execution_error(err: GraphError) -> GatewayError {
    GatewayError::Execution(err.to_string())
}
