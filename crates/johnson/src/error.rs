use thiserror::Error;

/// Errors produced by the johnson codec.
///
/// Every variant is a synchronous data-correctness failure surfaced
/// immediately to the caller; none is transient, so retrying never helps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JohnsonError {
    /// Syntax violation while decoding. Carries the byte offset at which
    /// the decoder could not continue.
    #[error("malformed JSON at byte {0}")]
    MalformedJson(usize),

    /// A string expected to be a JSON-RPC date matched none of the three
    /// date grammars. Carries the offending text.
    #[error("{0:?} is not a JSON-RPC date")]
    NotAJsonRpcDate(String),

    /// A map key of a type the key encoder does not support.
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(&'static str),

    /// A value outside the encodable set.
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(&'static str),

    /// A numeric token that could not be parsed.
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),
}
