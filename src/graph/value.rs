//! Driver-native result values
//!
//! Cells of a result record as the driver hands them over: null, boolean,
//! 64-bit integer, float, string, or a list of those. Decoding keeps the
//! full 64-bit integer; serialization only emits a JSON number when the
//! value survives a round trip through an IEEE double, and falls back to a
//! decimal string otherwise.

use serde_json::{Map, Number, Value};

/// Largest integer magnitude that fits exactly in a JSON number (2^53 - 1)
pub const JSON_SAFE_INT_MAX: i64 = 9_007_199_254_740_991;

/// A single result-record cell
#[derive(Debug, Clone, PartialEq)]
pub enum DbValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<DbValue>),
}

impl DbValue {
    /// Decode one cell from the driver's JSON representation.
    ///
    /// Some driver encodings split 64-bit integers into a `{high, low}`
    /// word pair; those are reassembled into the full value here. Taking
    /// only the low word would silently corrupt anything past 32 bits.
    pub fn from_json(value: Value) -> DbValue {
        match value {
            Value::Null => DbValue::Null,
            Value::Bool(b) => DbValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => DbValue::Int(i),
                // Integers past i64::MAX stay exact as strings rather than
                // degrading to a lossy float
                None if n.is_u64() => DbValue::String(n.to_string()),
                None => match n.as_f64() {
                    Some(f) => DbValue::Float(f),
                    None => DbValue::String(n.to_string()),
                },
            },
            Value::String(s) => DbValue::String(s),
            Value::Array(items) => {
                DbValue::List(items.into_iter().map(DbValue::from_json).collect())
            }
            Value::Object(map) => {
                if let Some(combined) = int64_from_words(&map) {
                    return DbValue::Int(combined);
                }
                // Node/relationship maps are not produced by the fixed query
                // catalog; keep them readable if one ever shows up.
                DbValue::String(Value::Object(map).to_string())
            }
        }
    }

    /// Serialize to a JSON-safe value.
    ///
    /// Integers beyond ±(2^53 - 1) become decimal strings rather than
    /// imprecise JSON numbers.
    pub fn to_json(&self) -> Value {
        match self {
            DbValue::Null => Value::Null,
            DbValue::Bool(b) => Value::Bool(*b),
            DbValue::Int(i) => {
                if (-JSON_SAFE_INT_MAX..=JSON_SAFE_INT_MAX).contains(i) {
                    Value::Number(Number::from(*i))
                } else {
                    Value::String(i.to_string())
                }
            }
            DbValue::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            DbValue::String(s) => Value::String(s.clone()),
            DbValue::List(items) => Value::Array(items.iter().map(DbValue::to_json).collect()),
        }
    }
}

/// Reassemble a 64-bit integer from a `{high, low}` word-pair object.
///
/// The low word is the unsigned bottom 32 bits even when the encoding
/// carries it as a signed 32-bit value.
fn int64_from_words(map: &Map<String, Value>) -> Option<i64> {
    if map.len() != 2 {
        return None;
    }
    let high = map.get("high")?.as_i64()?;
    let low = map.get("low")?.as_i64()?;
    Some((high << 32) | (low as u32 as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_decode() {
        assert_eq!(DbValue::from_json(json!(null)), DbValue::Null);
        assert_eq!(DbValue::from_json(json!(true)), DbValue::Bool(true));
        assert_eq!(DbValue::from_json(json!(2024)), DbValue::Int(2024));
        assert_eq!(DbValue::from_json(json!(0.75)), DbValue::Float(0.75));
        assert_eq!(
            DbValue::from_json(json!("REPUBLICAN")),
            DbValue::String("REPUBLICAN".to_string())
        );
    }

    #[test]
    fn test_integer_beyond_i64_stays_exact_as_string() {
        let value = DbValue::from_json(json!(u64::MAX));
        assert_eq!(value, DbValue::String("18446744073709551615".to_string()));
    }

    #[test]
    fn test_list_decodes_in_order() {
        let value = DbValue::from_json(json!(["Candidate", "Election"]));
        assert_eq!(
            value,
            DbValue::List(vec![
                DbValue::String("Candidate".to_string()),
                DbValue::String("Election".to_string()),
            ])
        );
    }

    #[test]
    fn test_word_pair_decodes_to_full_value() {
        // 81_985_529_216_486_895 == 0x0123_4567_89AB_CDEF
        let value = DbValue::from_json(json!({"high": 0x0123_4567, "low": 0x89AB_CDEFu32 as i32}));
        assert_eq!(value, DbValue::Int(0x0123_4567_89AB_CDEF));
    }

    #[test]
    fn test_word_pair_negative_low_is_unsigned() {
        // high=1, low=-1 (signed) is 1 * 2^32 + 0xFFFF_FFFF
        let value = DbValue::from_json(json!({"high": 1, "low": -1}));
        assert_eq!(value, DbValue::Int((1_i64 << 32) | 0xFFFF_FFFF));
    }

    #[test]
    fn test_word_pair_small_value() {
        let value = DbValue::from_json(json!({"high": 0, "low": 2020}));
        assert_eq!(value, DbValue::Int(2020));
    }

    #[test]
    fn test_other_objects_are_not_word_pairs() {
        let value = DbValue::from_json(json!({"high": 1, "low": 2, "extra": 3}));
        assert!(matches!(value, DbValue::String(_)));
    }

    #[test]
    fn test_safe_int_round_trips_as_number() {
        assert_eq!(
            DbValue::Int(JSON_SAFE_INT_MAX).to_json(),
            json!(9_007_199_254_740_991_i64)
        );
        assert_eq!(
            DbValue::Int(-JSON_SAFE_INT_MAX).to_json(),
            json!(-9_007_199_254_740_991_i64)
        );
    }

    #[test]
    fn test_unsafe_int_becomes_string() {
        assert_eq!(
            DbValue::Int(JSON_SAFE_INT_MAX + 1).to_json(),
            json!("9007199254740992")
        );
        assert_eq!(DbValue::Int(i64::MIN).to_json(), json!("-9223372036854775808"));
    }

    #[test]
    fn test_nan_float_serializes_as_null() {
        assert_eq!(DbValue::Float(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn test_label_list_passes_through() {
        let labels = DbValue::List(vec![
            DbValue::String("Candidate".to_string()),
            DbValue::String("Election".to_string()),
        ]);
        assert_eq!(labels.to_json(), json!(["Candidate", "Election"]));
    }
}
