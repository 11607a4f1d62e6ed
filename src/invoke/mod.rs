mod client;
mod decode;
mod types;

pub use client::{FunctionInvoker, HttpInvoker};
pub use decode::decode_envelope;
pub use types::InvocationPayload;
