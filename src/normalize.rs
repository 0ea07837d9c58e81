//! Result normalizer
//!
//! Turns driver-native records into JSON response objects through a fixed
//! per-endpoint field map. Mapping is total: every declared output field is
//! present in every object, with an explicit null when the source column is
//! absent. Pure functions, no state.

use serde_json::{Map, Value};

use crate::graph::{DbValue, Record};

/// Project one record through a field map of (output field, source column)
pub fn normalize(record: &Record, fields: &[(&str, &str)]) -> Map<String, Value> {
    fields
        .iter()
        .map(|(out, column)| {
            let value = record.get(column).map(DbValue::to_json).unwrap_or(Value::Null);
            (out.to_string(), value)
        })
        .collect()
}

/// Project every record of a result into an array of response objects
pub fn normalize_all(records: &[Record], fields: &[(&str, &str)]) -> Vec<Value> {
    records
        .iter()
        .map(|record| Value::Object(normalize(record, fields)))
        .collect()
}

/// The all-null object for a result that produced no record
pub fn empty_object(fields: &[(&str, &str)]) -> Map<String, Value> {
    fields
        .iter()
        .map(|(out, _)| (out.to_string(), Value::Null))
        .collect()
}
