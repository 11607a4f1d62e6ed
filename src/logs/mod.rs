mod query;
mod service;

pub use query::{LogQueryParams, MISSING_IDENTITY, MONITOR_MODE};
pub use service::{LogQueryService, SERVICE_NAME};
