use super::types::*;
use crate::{Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;

    async fn create_moderation(&self, request: ModerationRequest) -> Result<ModerationResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self { client }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&request.model).messages(messages);

        if let Some(temperature) = request.temperature {
            request_builder.temperature(temperature);
        }

        if !request.stop.is_empty() {
            request_builder.stop(openai_types::Stop::StringArray(request.stop));
        }

        if let Some(max_tokens) = request.max_tokens {
            #[allow(deprecated)]
            request_builder.max_tokens(max_tokens);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices: Vec<Choice> = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChatMessage::assistant(choice.message.content.unwrap_or_default()),
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
        })
    }

    async fn create_moderation(&self, request: ModerationRequest) -> Result<ModerationResponse> {
        debug!("Creating moderation for {} chars", request.input.len());

        let openai_request = openai_types::CreateModerationRequestArgs::default()
            .input(openai_types::ModerationInput::String(request.input))
            .build()?;

        let response = self.client.moderations().create(openai_request).await?;

        Ok(ModerationResponse {
            results: response
                .results
                .into_iter()
                .map(|result| ModerationResult {
                    flagged: result.flagged,
                })
                .collect(),
        })
    }
}
