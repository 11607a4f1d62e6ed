use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response wrapper shared by the query and proxy endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub data: T,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data,
            errors: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Body of the chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answers: String,
}
