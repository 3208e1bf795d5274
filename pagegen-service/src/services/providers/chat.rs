//! Chat-completions provider (OpenAI-compatible, Groq by default).
//!
//! Sends a two-message exchange: a fixed system message followed by the composed
//! prompt as the user turn. Also hosts the wire types shared with the plain REST
//! backend.

use super::{http_client, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

pub const DEFAULT_MODEL: &str = "qwen2.5-72b-instruct";

pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are an elite UI/UX architect. Generate ONLY complete, functional HTML code. Do not include any explanations, comments, or text before/after the HTML. Start directly with <!DOCTYPE html> and end with </html>. No markdown formatting.";

#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub system_message: String,
    pub params: GenerationParams,
}

impl ChatCompletionsConfig {
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GROQ_API_BASE.to_string(),
            timeout: Duration::from_secs(120),
            system_message: DEFAULT_SYSTEM_MESSAGE.to_string(),
            params: GenerationParams {
                temperature: Some(0.8),
                max_tokens: Some(4000),
                ..Default::default()
            },
        }
    }
}

pub struct ChatCompletionsProvider {
    config: ChatCompletionsConfig,
    client: Client,
}

impl ChatCompletionsProvider {
    pub fn new(config: ChatCompletionsConfig) -> Result<Self, ProviderError> {
        let client = http_client(config.timeout)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl TextProvider for ChatCompletionsProvider {
    fn name(&self) -> &'static str {
        "Groq"
    }

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.config.system_message,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.config.params.max_tokens,
            temperature: self.config.params.temperature,
            top_p: self.config.params.top_p,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(completions_url(&self.config.base_url))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion.into_provider_response()
    }
}

pub(super) fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

// ============================================================================
// Chat Completions Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub(super) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<i32>,
    completion_tokens: Option<i32>,
}

impl ChatCompletionResponse {
    /// Text of the first choice.
    pub(super) fn into_provider_response(self) -> Result<ProviderResponse, ProviderError> {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(ProviderResponse {
            text,
            input_tokens: self.usage.as_ref().and_then(|u| u.prompt_tokens),
            output_tokens: self.usage.as_ref().and_then(|u| u.completion_tokens),
        })
    }
}
