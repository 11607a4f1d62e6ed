use super::{field, relay};
use crate::{Result, invoke::FunctionInvoker};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const LAUNCH_TRAIN: &str = "launchTrain";

pub struct TrainingProxy {
    invoker: Arc<dyn FunctionInvoker>,
    function_name: String,
}

impl TrainingProxy {
    pub fn new(invoker: Arc<dyn FunctionInvoker>, function_name: impl Into<String>) -> Self {
        Self {
            invoker,
            function_name: function_name.into(),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Forwards `{serviceId, launchMode, mode}` plus anything else the caller
    /// sent (`schedule`, `parameters`, ...). On success the relayed `data`
    /// carries `experimentId`, `serviceId`, `waitTime`, `user` and `launchMode`.
    pub async fn launch_train(&self, request: &Value) -> Result<Value> {
        info!(
            "Launching {} training for service {} ({})",
            field(request, "launchMode"),
            field(request, "serviceId"),
            field(request, "mode")
        );
        relay(self.invoker.as_ref(), &self.function_name, request).await
    }
}
