//! [`RpcValue`] — the value union every codec entry point operates on.

use chrono::NaiveDateTime;

use crate::date;
use crate::key;

/// In-memory representation of anything the codec can read or write.
///
/// Deviates from standard JSON in two ways: map keys are themselves
/// [`RpcValue`]s rather than strings, and date-times are a first-class
/// variant with millisecond resolution. `Array` elements and `Map` entries
/// keep their insertion order; maps are never sorted.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcValue {
    /// JSON null
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer (fits in i64)
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// String
    Str(String),
    /// Timezone-naive instant with millisecond resolution
    DateTime(NaiveDateTime),
    /// Array of values
    Array(Vec<RpcValue>),
    /// Ordered key-value pairs; keys may be any value
    Map(Vec<(RpcValue, RpcValue)>),
}

impl From<serde_json::Value> for RpcValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => RpcValue::Null,
            serde_json::Value::Bool(b) => RpcValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(int) = n.as_i64() {
                    RpcValue::Integer(int)
                } else {
                    RpcValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            // A string matching a date grammar is always a date, same as
            // the decoder's treatment of string tokens.
            serde_json::Value::String(s) => match date::parse_json_rpc_date(&s) {
                Ok(dt) => RpcValue::DateTime(dt),
                Err(_) => RpcValue::Str(s),
            },
            serde_json::Value::Array(arr) => {
                RpcValue::Array(arr.into_iter().map(RpcValue::from).collect())
            }
            serde_json::Value::Object(obj) => RpcValue::Map(
                obj.into_iter()
                    .map(|(k, v)| (RpcValue::Str(k), RpcValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<RpcValue> for serde_json::Value {
    fn from(v: RpcValue) -> Self {
        match v {
            RpcValue::Null => serde_json::Value::Null,
            RpcValue::Bool(b) => serde_json::Value::Bool(b),
            RpcValue::Integer(int) => serde_json::Value::from(int),
            // Non-finite floats become null, per serde_json.
            RpcValue::Float(f) => serde_json::Value::from(f),
            RpcValue::Str(s) => serde_json::Value::String(s),
            RpcValue::DateTime(dt) => {
                serde_json::Value::String(date::format_json_rpc_date(dt))
            }
            RpcValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            RpcValue::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (map_key_text(&k), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Key text for the lossy serde_json conversion. Text keys pass through
/// as-is; anything else uses the superset field-name form.
fn map_key_text(k: &RpcValue) -> String {
    match k {
        RpcValue::Str(s) => s.clone(),
        RpcValue::DateTime(dt) => date::format_json_rpc_date(*dt),
        other => key::encode_key(other).unwrap_or_else(|_| "null".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::RpcValue;
    use serde_json::json;

    #[test]
    fn serde_json_to_rpc_value() {
        let v = RpcValue::from(json!({"a": 1, "b": [true, null, 1.5]}));
        assert_eq!(
            v,
            RpcValue::Map(vec![
                (RpcValue::Str("a".into()), RpcValue::Integer(1)),
                (
                    RpcValue::Str("b".into()),
                    RpcValue::Array(vec![
                        RpcValue::Bool(true),
                        RpcValue::Null,
                        RpcValue::Float(1.5),
                    ]),
                ),
            ])
        );
    }

    #[test]
    fn serde_json_date_strings_become_dates() {
        let v = RpcValue::from(json!("date{2000-1-1}"));
        assert!(matches!(v, RpcValue::DateTime(_)));
        let v = RpcValue::from(json!("2015-08-15T17:23:30.803Z"));
        assert!(matches!(v, RpcValue::DateTime(_)));
        let v = RpcValue::from(json!("date{not-a-date}"));
        assert_eq!(v, RpcValue::Str("date{not-a-date}".into()));
    }

    #[test]
    fn rpc_value_to_serde_json_keeps_order() {
        let v = RpcValue::Map(vec![
            (RpcValue::Str("z".into()), RpcValue::Integer(1)),
            (RpcValue::Str("a".into()), RpcValue::Integer(2)),
            (RpcValue::Bool(true), RpcValue::Integer(3)),
        ]);
        let json = serde_json::Value::from(v);
        assert_eq!(serde_json::to_string(&json).unwrap(), r#"{"z":1,"a":2,"true":3}"#);
    }
}
