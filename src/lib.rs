pub mod chat;
pub mod config;
pub mod envelope;
pub mod error;
pub mod invoke;
pub mod llm;
pub mod logs;
pub mod proxy;
pub mod server;
pub mod store;

pub use error::{Error, Result};
