//! Generic REST backend for chat-completions-shaped endpoints (Inception Labs
//! by default).
//!
//! Plain bearer-token POST with a single user message. Only HTTP 200 counts as
//! success; every other status is reported, never retried.

use super::chat::{completions_url, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use super::{http_client, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

pub const INCEPTION_API_BASE: &str = "https://api.inceptionlabs.ai/v1";

pub const DEFAULT_MODEL: &str = "mercury-coder";

#[derive(Debug, Clone)]
pub struct RestCompletionsConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub params: GenerationParams,
}

impl RestCompletionsConfig {
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: INCEPTION_API_BASE.to_string(),
            timeout: Duration::from_secs(120),
            params: GenerationParams {
                max_tokens: Some(2000),
                ..Default::default()
            },
        }
    }
}

pub struct RestCompletionsProvider {
    config: RestCompletionsConfig,
    client: Client,
}

impl RestCompletionsProvider {
    pub fn new(config: RestCompletionsConfig) -> Result<Self, ProviderError> {
        let client = http_client(config.timeout)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl TextProvider for RestCompletionsProvider {
    fn name(&self) -> &'static str {
        "Inception Labs"
    }

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.params.max_tokens,
            temperature: self.config.params.temperature,
            top_p: self.config.params.top_p,
        };

        let response = self
            .client
            .post(completions_url(&self.config.base_url))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                response = %body,
                "API request failed"
            );
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion.into_provider_response()
    }
}
