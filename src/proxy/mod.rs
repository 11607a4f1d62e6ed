//! Handlers that forward a request to another function and relay its envelope.

mod dashboard;
mod training;

pub use dashboard::{DASHBOARD_STUDENT, DashboardProxy};
pub use training::{LAUNCH_TRAIN, TrainingProxy};

use crate::{
    Result,
    invoke::{FunctionInvoker, InvocationPayload, decode_envelope},
};
use serde_json::Value;
use tracing::{debug, info};

/// Forwards `request` as the JSON body of a POST event and returns the
/// decoded envelope exactly as the function produced it.
async fn relay(
    invoker: &dyn FunctionInvoker,
    function_name: &str,
    request: &Value,
) -> Result<Value> {
    let payload = InvocationPayload::post_json(request)?;
    let raw = invoker.invoke(function_name, payload).await?;
    debug!("{} raw response: {}", function_name, raw);

    let envelope = decode_envelope(raw)?;
    info!("{} responded with status {}", function_name, envelope["status"]);
    Ok(envelope)
}

/// String field of a request body, for log lines only.
fn field<'a>(request: &'a Value, key: &str) -> &'a str {
    request.get(key).and_then(Value::as_str).unwrap_or("-")
}
