//! johnson — a permissive JSON superset codec.
//!
//! Extends standard JSON with three capabilities:
//! - map keys of any value type, written unquoted (`{true:1,null:null}`);
//!   composite keys are spliced in as escaped nested documents;
//! - a bracketed date form `date{yyyy-MM-dd-HH-mm-ss-SSS}`, the short
//!   `date{yyyy-MM-dd}` form, and ISO-8601 timestamps on input;
//! - deterministic shortest round-trip number formatting with uppercase-`E`
//!   scientific notation outside `1e-3 <= |d| < 1e7`.
//!
//! Every call is a pure, self-contained computation; encoders and decoders
//! are constructed per call and share no mutable state, so concurrent
//! callers need no coordination.
//!
//! # Example
//!
//! ```
//! use johnson::{decode, encode, RpcValue};
//!
//! let value = RpcValue::Array(vec![
//!     RpcValue::Str("a".into()),
//!     RpcValue::Integer(1),
//!     RpcValue::Bool(true),
//! ]);
//! let text = encode(&value).unwrap();
//! assert_eq!(text, "[\"a\",1,true]");
//! assert_eq!(decode(&text).unwrap(), value);
//! ```

mod date;
mod error;
mod json;
mod key;
mod number;
mod value;

pub use date::{
    format_json_rpc_date, format_short_date, format_with_pattern, parse_json_rpc_date,
    parse_short_date,
};
pub use error::JohnsonError;
pub use json::{JsonDecoder, JsonEncoder};
pub use key::encode_key;
pub use number::{format_float, format_integer, parse_number};
pub use value::RpcValue;

/// Encode a value tree to compact JSON-superset text.
///
/// Never fails for finite, acyclic trees whose map keys stay inside the
/// supported key set; otherwise `UnsupportedKeyType` or
/// `UnsupportedValueType`.
pub fn encode(value: &RpcValue) -> Result<String, JohnsonError> {
    JsonEncoder::new().encode(value)
}

/// Decode JSON-superset text into a freshly allocated value tree.
pub fn decode(text: &str) -> Result<RpcValue, JohnsonError> {
    JsonDecoder::new().decode(text)
}
