//! LLM backend abstractions and implementations.
//!
//! Every backend turns one composed prompt into raw generated text. The rest of
//! the pipeline (topic translation, prompt composition, sanitizing) is shared and
//! only the adapter varies.

pub mod chat;
pub mod gemini;
pub mod mock;
pub mod rest;

use crate::config::{Backend, PagegenConfig};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Content filtered")]
    ContentFiltered,
}

impl ProviderError {
    /// HTTP status reported by the upstream API, if the failure carried one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ProviderError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // Upstream URLs can carry credentials, never surface them.
        let err = err.without_url();
        if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Generated text plus whatever usage data the backend reported.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
}

/// Sampling parameters. Fixed per backend, never edited at runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Nucleus sampling.
    pub top_p: Option<f32>,

    /// Top-k sampling.
    pub top_k: Option<i32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

/// A single upstream text-generation API.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Human-readable vendor name, used in logs and error pages.
    fn name(&self) -> &'static str;

    /// Generate text for a fully composed prompt.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;
}

/// Shared reqwest client setup for every real backend.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e)))
}

/// Build the provider selected by configuration.
pub fn build_provider(config: &PagegenConfig) -> Result<Arc<dyn TextProvider>, ProviderError> {
    let api_key = || {
        config.api_key.clone().ok_or_else(|| {
            ProviderError::NotConfigured(format!(
                "{} backend requires an API key",
                config.backend
            ))
        })
    };

    let provider: Arc<dyn TextProvider> = match config.backend {
        Backend::Generative => {
            let mut gemini = gemini::GeminiConfig::new(api_key()?);
            if let Some(model) = &config.model {
                gemini.model = model.clone();
            }
            if let Some(url) = &config.upstream_url {
                gemini.base_url = url.clone();
            }
            gemini.timeout = config.upstream_timeout;
            Arc::new(gemini::GeminiTextProvider::new(gemini)?)
        }
        Backend::ChatCompletions => {
            let mut chat = chat::ChatCompletionsConfig::new(api_key()?);
            if let Some(model) = &config.model {
                chat.model = model.clone();
            }
            if let Some(url) = &config.upstream_url {
                chat.base_url = url.clone();
            }
            chat.timeout = config.upstream_timeout;
            Arc::new(chat::ChatCompletionsProvider::new(chat)?)
        }
        Backend::Rest => {
            let mut rest = rest::RestCompletionsConfig::new(api_key()?);
            if let Some(model) = &config.model {
                rest.model = model.clone();
            }
            if let Some(url) = &config.upstream_url {
                rest.base_url = url.clone();
            }
            rest.timeout = config.upstream_timeout;
            Arc::new(rest::RestCompletionsProvider::new(rest)?)
        }
        Backend::Mock => Arc::new(mock::MockTextProvider::default()),
    };

    Ok(provider)
}
