//! Result records
//!
//! One row of a statement result: column names plus one value per column.
//! Records are produced by the executor and consumed immediately by the
//! normalizer; nothing retains them across requests.

use std::sync::Arc;

use super::value::DbValue;

/// A single result row keyed by column name
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<DbValue>,
}

impl Record {
    /// Create a record. Columns are shared across all rows of one result.
    pub fn new(columns: Arc<[String]>, values: Vec<DbValue>) -> Self {
        Self { columns, values }
    }

    /// Look up a cell by column name
    pub fn get(&self, column: &str) -> Option<&DbValue> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.values.get(index)
    }

    /// Column names, in result order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}
