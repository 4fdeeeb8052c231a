//! Map-key rendering and its decode-side inverse.

use crate::error::JohnsonError;
use crate::json::{JsonDecoder, JsonEncoder};
use crate::number;
use crate::value::RpcValue;

/// Render a map key as a JSON field-name token.
///
/// Primitive keys are written unquoted (`true`, `null`, `10`, `1.5`), text
/// keys as ordinary quoted strings. A composite key (map or array) is
/// encoded as a complete JSON document whose text is then string-escaped
/// and spliced in without surrounding quotes, e.g. `{\"a\":1}`. The
/// composite form is not valid RFC 8259 JSON; callers needing strict
/// output must keep to text keys.
pub fn encode_key(key: &RpcValue) -> Result<String, JohnsonError> {
    match key {
        RpcValue::Null => Ok("null".to_string()),
        RpcValue::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
        RpcValue::Integer(int) => Ok(number::format_integer(*int)),
        RpcValue::Float(f) if f.is_finite() => Ok(number::format_float(*f)),
        RpcValue::Float(_) => Err(JohnsonError::UnsupportedValueType("non-finite number")),
        RpcValue::Str(s) => Ok(escape_str(s)),
        RpcValue::DateTime(_) => Err(JohnsonError::UnsupportedKeyType("date")),
        RpcValue::Array(_) | RpcValue::Map(_) => {
            let doc = JsonEncoder::new().encode(key)?;
            Ok(escape_body(&doc))
        }
    }
}

/// Decode an unquoted field-name token back into a key value: the literals
/// `null`/`true`/`false`, a number, or a spliced nested document.
pub(crate) fn decode_key_token(token: &str, at: usize) -> Result<RpcValue, JohnsonError> {
    match token {
        "null" => Ok(RpcValue::Null),
        "true" => Ok(RpcValue::Bool(true)),
        "false" => Ok(RpcValue::Bool(false)),
        _ => {
            if let Ok(num) = number::parse_number(token) {
                return Ok(num);
            }
            let doc = unescape_body(token).ok_or(JohnsonError::MalformedJson(at))?;
            JsonDecoder::new().decode(&doc)
        }
    }
}

/// Quoted, escaped JSON string.
pub(crate) fn escape_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// JSON-string-escape a document body without surrounding quotes: the
/// field-name form of a composite key.
fn escape_body(doc: &str) -> String {
    let quoted = escape_str(doc);
    quoted[1..quoted.len() - 1].to_string()
}

/// Undo [`escape_body`].
fn unescape_body(token: &str) -> Option<String> {
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('"');
    quoted.push_str(token);
    quoted.push('"');
    serde_json::from_str(&quoted).ok()
}
