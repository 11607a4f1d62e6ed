use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event shape handed to an invoked function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationPayload {
    pub body: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    pub http_method: String,
}

impl InvocationPayload {
    /// POST event whose body is `body` encoded as a JSON string.
    pub fn post_json<T: Serialize>(body: &T) -> crate::Result<Self> {
        Ok(Self {
            body: serde_json::to_string(body)?,
            query_string_parameters: None,
            http_method: "POST".to_string(),
        })
    }
}
