//! Mock provider for local runs and tests.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

const MOCK_PAGE: &str = "```html\n<!DOCTYPE html>\n<html>\n<head><title>Mock page</title></head>\n<body>\n<h1>Mock page</h1>\n<a href=\"/change-prompt\">Change System Prompt</a>\n</body>\n</html>\n```";

#[derive(Debug, Clone)]
enum Behavior {
    Respond(String),
    FailUpstream { status: u16, body: String },
    FailNetwork(String),
}

/// Mock text provider that answers with canned text.
///
/// Prompts are kept only when built with [`MockTextProvider::recording`], so the
/// runtime `mock` backend holds no per-request state.
pub struct MockTextProvider {
    behavior: Behavior,
    prompts: Option<Mutex<Vec<String>>>,
}

impl Default for MockTextProvider {
    fn default() -> Self {
        Self::responding(MOCK_PAGE)
    }
}

impl MockTextProvider {
    pub fn responding(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Respond(text.into()))
    }

    pub fn failing_upstream(status: u16, body: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::FailUpstream {
            status,
            body: body.into(),
        })
    }

    pub fn failing_network(message: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::FailNetwork(message.into()))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            prompts: None,
        }
    }

    /// Keep every prompt passed to `generate`.
    pub fn recording(mut self) -> Self {
        self.prompts = Some(Mutex::new(Vec::new()));
        self
    }

    /// Prompts received so far, oldest first. Always empty unless recording.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .as_ref()
            .and_then(|p| p.lock().ok().map(|p| p.clone()))
            .unwrap_or_default()
    }
}

/// Rough token estimate of four bytes per token.
fn approx_tokens(text: &str) -> Option<i32> {
    i32::try_from(text.len() / 4).ok()
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if let Some(Ok(mut prompts)) = self.prompts.as_ref().map(|p| p.lock()) {
            prompts.push(prompt.to_string());
        }

        match &self.behavior {
            Behavior::Respond(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: approx_tokens(prompt),
                output_tokens: approx_tokens(text),
            }),
            Behavior::FailUpstream { status, body } => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            Behavior::FailNetwork(message) => Err(ProviderError::Network(message.clone())),
        }
    }
}
