use super::{field, relay};
use crate::{Result, invoke::FunctionInvoker};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub const DASHBOARD_STUDENT: &str = "dashboardStudent";

pub struct DashboardProxy {
    invoker: Arc<dyn FunctionInvoker>,
    function_name: String,
}

impl DashboardProxy {
    pub fn new(invoker: Arc<dyn FunctionInvoker>, function_name: impl Into<String>) -> Self {
        Self {
            invoker,
            function_name: function_name.into(),
        }
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// `profile` is a student profile (`personId`, `type`, and optionally
    /// `gradYear`, `county`, `state`, `interests`, `mentor`, `schoolId`). It is
    /// forwarded as received; checking it is up to the dashboard function.
    pub async fn dashboard_student(&self, profile: &Value) -> Result<Value> {
        info!("Forwarding dashboard request for person {}", field(profile, "personId"));
        relay(self.invoker.as_ref(), &self.function_name, profile).await
    }
}
