//! Shared test support: an in-memory driver implementing the graph seam
//!
//! The fake driver replays a scripted sequence of per-statement outcomes
//! and counts session lifecycle events so tests can assert the
//! acquire-once/release-once discipline.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use electograph::graph::{DbValue, GraphDriver, GraphError, GraphSession, Record, Statement};

/// Observable driver state shared with sessions
#[derive(Default)]
pub struct FakeState {
    script: Mutex<VecDeque<Result<Vec<Record>, GraphError>>>,
    pub opened: AtomicUsize,
    pub closed: AtomicUsize,
    pub committed: AtomicUsize,
    pub rolled_back: AtomicUsize,
    pub statements: Mutex<Vec<Statement>>,
    pub fail_close: AtomicBool,
}

/// Scripted in-memory driver
pub struct FakeDriver {
    pub state: Arc<FakeState>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self {
            state: Arc::new(FakeState::default()),
        }
    }

    /// Queue a successful result for the next statement
    pub fn push_result(&self, records: Vec<Record>) {
        self.state.script.lock().unwrap().push_back(Ok(records));
    }

    /// Queue a database error for the next statement
    pub fn push_error(&self, message: &str) {
        self.state.script.lock().unwrap().push_back(Err(GraphError::Database {
            code: "Neo.ClientError.Procedure.ProcedureCallFailed".to_string(),
            message: message.to_string(),
        }));
    }

    /// Make the next session release fail
    pub fn fail_close(&self) {
        self.state.fail_close.store(true, Ordering::SeqCst);
    }

    /// Statements run so far, in submission order
    pub fn statements(&self) -> Vec<Statement> {
        self.state.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphDriver for FakeDriver {
    async fn open_session(&self) -> Result<Box<dyn GraphSession>, GraphError> {
        self.state.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession {
            state: self.state.clone(),
        }))
    }
}

struct FakeSession {
    state: Arc<FakeState>,
}

#[async_trait]
impl GraphSession for FakeSession {
    async fn run(&mut self, statement: &Statement) -> Result<Vec<Record>, GraphError> {
        self.state.statements.lock().unwrap().push(statement.clone());
        self.state
            .script
            .lock()
            .unwrap()
            .pop_front()
            // Unscripted statements answer with zero rows
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn close(self: Box<Self>, commit: bool) -> Result<(), GraphError> {
        self.state.closed.fetch_add(1, Ordering::SeqCst);
        if commit {
            self.state.committed.fetch_add(1, Ordering::SeqCst);
        } else {
            self.state.rolled_back.fetch_add(1, Ordering::SeqCst);
        }
        if self.state.fail_close.load(Ordering::SeqCst) {
            Err(GraphError::Transport("session release failed".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Build a record from column names and values
pub fn record(columns: &[&str], values: Vec<DbValue>) -> Record {
    let columns: Arc<[String]> = columns
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .into();
    Record::new(columns, values)
}
