use crate::{
    Result,
    envelope::ChatAnswer,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, ModerationRequest},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const INAPPROPRIATE_QUESTION: &str =
    "Sorry, I am only capable of answering friendly questions. Please try again.";
pub const INAPPROPRIATE_CONTENT: &str =
    "Ouch! Answer is too sensitive. PLease try another question.";

pub const TEMPERATURE: f32 = 0.2;
pub const STOP_SEQUENCES: [&str; 2] = ["user", " assistant"];

const SYSTEM_PROMPT: &str = "The following is a conversation with an AI assistant. The assistant is helpful, creative, clever, and very friendly. You are named as Chai Bot.";
const EXAMPLE_QUESTION: &str = "Hello, who are you?";
const EXAMPLE_ANSWER: &str = "I am Chai Bot! an AI created by AIClub. How can I help you today?";

/// Fixed few-shot conversation placed ahead of every user question.
pub fn conversation_seed() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(EXAMPLE_QUESTION),
        ChatMessage::assistant(EXAMPLE_ANSWER),
    ]
}

pub struct ChatResponder {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl ChatResponder {
    pub fn new(llm: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    /// Returns `true` when moderation flags `content`.
    pub async fn filter_content(&self, content: &str) -> Result<bool> {
        let response = self
            .llm
            .create_moderation(ModerationRequest {
                input: content.to_string(),
            })
            .await?;
        response.flagged()
    }

    pub async fn answer(&self, question: &str, max_tokens: Option<u32>) -> Result<ChatAnswer> {
        if self.filter_content(question).await? {
            info!("Question rejected by moderation");
            return Ok(ChatAnswer {
                answers: INAPPROPRIATE_QUESTION.to_string(),
            });
        }

        let mut messages = conversation_seed();
        messages.push(ChatMessage::user(question));

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens,
            stop: STOP_SEQUENCES.iter().map(|s| s.to_string()).collect(),
            temperature: Some(TEMPERATURE),
        };

        let response = self.llm.create_chat_completion(request).await?;
        let completion = response.first_content()?;
        debug!("Completion has {} chars", completion.len());

        if self.filter_content(completion).await? {
            info!("Completion rejected by moderation");
            return Ok(ChatAnswer {
                answers: INAPPROPRIATE_CONTENT.to_string(),
            });
        }

        Ok(ChatAnswer {
            answers: completion.to_string(),
        })
    }
}
