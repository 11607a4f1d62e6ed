use aiclub_functions::{
    Error, Result,
    invoke::{FunctionInvoker, InvocationPayload},
    llm::{
        ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient,
        ModerationRequest, ModerationResponse, ModerationResult,
    },
    store::{Row, StatementExecutor},
};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Mock LLM client that hands out queued moderation verdicts and completions.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub moderations: Arc<Mutex<Vec<ModerationResponse>>>,
    pub completions: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub moderation_requests: Arc<Mutex<Vec<ModerationRequest>>>,
    pub completion_requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moderation(self, flagged: bool) -> Self {
        self.moderations
            .lock()
            .unwrap()
            .push(create_moderation_response(flagged));
        self
    }

    pub fn with_completion(self, content: &str) -> Self {
        self.completions
            .lock()
            .unwrap()
            .push(create_mock_chat_response(content));
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_moderation_requests(&self) -> Vec<ModerationRequest> {
        self.moderation_requests.lock().unwrap().clone()
    }

    pub fn get_completion_requests(&self) -> Vec<ChatCompletionRequest> {
        self.completion_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.completion_requests.lock().unwrap().push(request);

        let mut completions = self.completions.lock().unwrap();
        if completions.is_empty() {
            return Err(Error::llm("No more mock completions available"));
        }
        Ok(completions.remove(0))
    }

    async fn create_moderation(&self, request: ModerationRequest) -> Result<ModerationResponse> {
        self.moderation_requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut moderations = self.moderations.lock().unwrap();
        if moderations.is_empty() {
            return Err(Error::llm("No more mock moderations available"));
        }
        Ok(moderations.remove(0))
    }
}

/// Mock store that records statements and returns fixed rows.
#[derive(Debug, Default)]
pub struct MockStatementExecutor {
    pub rows: Vec<Row>,
    pub statements: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockStatementExecutor {
    pub fn new() -> Self {
        Self {
            rows: vec![create_prediction_row("pred123", "ser123", "2025-03-24T13:10:23")],
            ..Self::default()
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatementExecutor for MockStatementExecutor {
    async fn execute_statement(&self, statement: &str) -> Result<Vec<Row>> {
        self.statements.lock().unwrap().push(statement.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }
        Ok(self.rows.clone())
    }
}

/// Mock invoker returning queued raw results and recording every call.
#[derive(Debug, Default)]
pub struct MockInvoker {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub calls: Arc<Mutex<Vec<(String, InvocationPayload)>>>,
}

impl MockInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: Value) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_calls(&self) -> Vec<(String, InvocationPayload)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FunctionInvoker for MockInvoker {
    async fn invoke(&self, function_name: &str, payload: InvocationPayload) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((function_name.to_string(), payload));

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::invocation("No more mock responses available"));
        }
        Ok(responses.remove(0))
    }
}

pub fn create_moderation_response(flagged: bool) -> ModerationResponse {
    ModerationResponse {
        results: vec![ModerationResult { flagged }],
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-test".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: Some("stop".to_string()),
        }],
    }
}

pub fn create_prediction_row(prediction_id: &str, ser_id: &str, timestamp: &str) -> Row {
    let value = json!({
        "prediction_id": prediction_id,
        "ser_id": ser_id,
        "timestamp": timestamp,
    });
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Function result wrapped the way a proxy integration returns it.
pub fn create_proxy_response(envelope: Value) -> Value {
    json!({ "statusCode": 200, "body": envelope.to_string() })
}
