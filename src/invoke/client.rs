use super::InvocationPayload;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    /// Synchronously invokes `function_name` and returns its raw result.
    async fn invoke(&self, function_name: &str, payload: InvocationPayload) -> Result<Value>;
}

/// Invokes functions through a Lambda-compatible `Invoke` HTTP endpoint.
pub struct HttpInvoker {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInvoker {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn invocation_url(&self, function_name: &str) -> String {
        format!(
            "{}/2015-03-31/functions/{}/invocations",
            self.base_url, function_name
        )
    }
}

#[async_trait]
impl FunctionInvoker for HttpInvoker {
    async fn invoke(&self, function_name: &str, payload: InvocationPayload) -> Result<Value> {
        debug!(
            "Invoking {} ({} event, {} byte body)",
            function_name,
            payload.http_method,
            payload.body.len()
        );

        let response = self
            .client
            .post(self.invocation_url(function_name))
            .header("X-Amz-Invocation-Type", "RequestResponse")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let function_error = response
            .headers()
            .get("X-Amz-Function-Error")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;

        if !status.is_success() {
            warn!("{} invocation failed with {}", function_name, status);
            return Err(Error::invocation(format!(
                "{function_name} returned {status}: {text}"
            )));
        }

        if let Some(kind) = function_error {
            warn!("{} raised {}", function_name, kind);
            return Err(Error::invocation(format!(
                "{function_name} raised {kind}: {text}"
            )));
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invocation_url_trims_trailing_slash() {
        let invoker = HttpInvoker::new("http://localhost:9001/");
        assert_eq!(
            invoker.invocation_url("yasanthi_launchTrain"),
            "http://localhost:9001/2015-03-31/functions/yasanthi_launchTrain/invocations"
        );
    }
}
