//! JSON text encoder/decoder over [`crate::RpcValue`] trees.

mod decoder;
mod encoder;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
