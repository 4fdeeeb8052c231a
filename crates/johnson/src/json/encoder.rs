//! `JsonEncoder` — compact JSON writer for [`RpcValue`] trees.
//!
//! No whitespace is inserted between tokens. Map keys go through
//! [`crate::encode_key`], so primitive keys come out unquoted and
//! composite keys as spliced escaped documents.

use chrono::NaiveDateTime;

use crate::date;
use crate::error::JohnsonError;
use crate::key;
use crate::number;
use crate::value::RpcValue;

pub struct JsonEncoder {
    out: String,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Encode a value tree to text. The encoder assumes the tree is finite
    /// and acyclic; a cyclic structure recurses without bound.
    pub fn encode(&mut self, value: &RpcValue) -> Result<String, JohnsonError> {
        self.out.clear();
        self.write_any(value)?;
        Ok(std::mem::take(&mut self.out))
    }

    pub fn write_any(&mut self, value: &RpcValue) -> Result<(), JohnsonError> {
        match value {
            RpcValue::Null => self.write_null(),
            RpcValue::Bool(b) => self.write_boolean(*b),
            RpcValue::Integer(int) => self.write_integer(*int),
            RpcValue::Float(f) => self.write_float(*f)?,
            RpcValue::Str(s) => self.write_str(s),
            RpcValue::DateTime(dt) => self.write_date(*dt),
            RpcValue::Array(arr) => self.write_arr(arr)?,
            RpcValue::Map(map) => self.write_map(map)?,
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.out.push_str("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    pub fn write_integer(&mut self, int: i64) {
        self.out.push_str(&number::format_integer(int));
    }

    pub fn write_float(&mut self, float: f64) -> Result<(), JohnsonError> {
        if !float.is_finite() {
            return Err(JohnsonError::UnsupportedValueType("non-finite number"));
        }
        self.out.push_str(&number::format_float(float));
        Ok(())
    }

    /// Write a quoted, escaped JSON string.
    pub fn write_str(&mut self, s: &str) {
        // Fast path: printable ASCII with no quote or backslash.
        let clean = s
            .bytes()
            .all(|b| (32..127).contains(&b) && b != b'"' && b != b'\\');
        if clean {
            self.out.push('"');
            self.out.push_str(s);
            self.out.push('"');
            return;
        }
        self.out.push_str(&key::escape_str(s));
    }

    /// Dates always write as the quoted long bracket form.
    pub fn write_date(&mut self, dt: NaiveDateTime) {
        self.out.push('"');
        self.out.push_str(&date::format_json_rpc_date(dt));
        self.out.push('"');
    }

    pub fn write_arr(&mut self, arr: &[RpcValue]) -> Result<(), JohnsonError> {
        self.out.push('[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_any(item)?;
        }
        self.out.push(']');
        Ok(())
    }

    pub fn write_map(&mut self, map: &[(RpcValue, RpcValue)]) -> Result<(), JohnsonError> {
        self.out.push('{');
        for (i, (k, v)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            let field = key::encode_key(k)?;
            self.out.push_str(&field);
            self.out.push(':');
            self.write_any(v)?;
        }
        self.out.push('}');
        Ok(())
    }
}
