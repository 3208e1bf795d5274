use crate::services::PromptProfile;
use axum::http::StatusCode;
use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Value shipped in sample environments in place of a real key.
const PLACEHOLDER_API_KEY: &str = "your-fallback-api-key-here";

#[derive(Debug, Clone)]
pub struct PagegenConfig {
    pub common: core_config::Config,
    pub backend: Backend,
    /// `None` only for the mock backend.
    pub api_key: Option<Secret<String>>,
    /// Overrides the backend's default model.
    pub model: Option<String>,
    /// Overrides the backend's default base URL.
    pub upstream_url: Option<String>,
    pub upstream_timeout: Duration,
    pub error_status: ErrorStatusPolicy,
    pub otlp_endpoint: Option<String>,
}

impl PagegenConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let backend: Backend = get_env("PAGEGEN_BACKEND", Some("generative"), is_prod)?
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        let api_key = match backend.credential_env() {
            Some(key) => Some(validate_api_key(key, get_env(key, None, is_prod)?)?),
            None => None,
        };

        let upstream_timeout = parse_timeout(&get_env(
            "PAGEGEN_UPSTREAM_TIMEOUT_SECS",
            Some(&DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string()),
            is_prod,
        )?)?;

        let error_status: ErrorStatusPolicy = get_env("PAGEGEN_ERROR_STATUS", Some("ok"), is_prod)?
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        Ok(PagegenConfig {
            common: common_config,
            backend,
            api_key,
            model: optional_env("PAGEGEN_MODEL"),
            upstream_url: optional_env("PAGEGEN_UPSTREAM_URL"),
            upstream_timeout,
            error_status,
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

/// Upstream LLM API the gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Gemini `generateContent`.
    Generative,
    /// OpenAI-compatible chat completions with a system message (Groq).
    ChatCompletions,
    /// Plain REST chat-completions endpoint (Inception Labs).
    Rest,
    /// Canned responses, no network.
    Mock,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Generative => "generative",
            Backend::ChatCompletions => "chat-completions",
            Backend::Rest => "rest",
            Backend::Mock => "mock",
        }
    }

    /// Environment variable holding this backend's API key.
    pub fn credential_env(&self) -> Option<&'static str> {
        match self {
            Backend::Generative => Some("GOOGLE_API_KEY"),
            Backend::ChatCompletions => Some("GROQ_API_KEY"),
            Backend::Rest => Some("INCEPTION_API_KEY"),
            Backend::Mock => None,
        }
    }

    pub fn prompt_profile(&self) -> PromptProfile {
        match self {
            Backend::ChatCompletions => PromptProfile::Showcase,
            Backend::Generative | Backend::Rest | Backend::Mock => PromptProfile::Standard,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generative" | "gemini" => Ok(Backend::Generative),
            "chat-completions" | "chat" | "groq" => Ok(Backend::ChatCompletions),
            "rest" | "mercury" | "inception" => Ok(Backend::Rest),
            "mock" => Ok(Backend::Mock),
            other => Err(format!("unknown PAGEGEN_BACKEND '{}'", other)),
        }
    }
}

/// HTTP status used when page generation fails. The body is always the HTML
/// error fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatusPolicy {
    /// Always 200.
    #[default]
    AlwaysOk,
    /// The upstream's own status when it sent one, otherwise 502.
    Propagate,
}

impl ErrorStatusPolicy {
    pub fn status_for(&self, upstream_status: Option<u16>) -> StatusCode {
        match self {
            ErrorStatusPolicy::AlwaysOk => StatusCode::OK,
            ErrorStatusPolicy::Propagate => upstream_status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| !s.is_success())
                .unwrap_or(StatusCode::BAD_GATEWAY),
        }
    }
}

impl FromStr for ErrorStatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" | "always-ok" => Ok(ErrorStatusPolicy::AlwaysOk),
            "upstream" | "propagate" => Ok(ErrorStatusPolicy::Propagate),
            other => Err(format!("unknown PAGEGEN_ERROR_STATUS '{}'", other)),
        }
    }
}

/// Reject empty and placeholder credentials.
pub fn validate_api_key(key: &str, value: String) -> Result<Secret<String>, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER_API_KEY {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is not set; export a real API key",
            key
        )));
    }
    Ok(Secret::new(trimmed.to_string()))
}

/// Upstream timeout in whole seconds; zero is rejected.
pub fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs: u64 = raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "PAGEGEN_UPSTREAM_TIMEOUT_SECS '{}' is not a number of seconds: {}",
            raw,
            e
        ))
    })?;
    if secs == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "PAGEGEN_UPSTREAM_TIMEOUT_SECS must be at least 1"
        )));
    }
    Ok(Duration::from_secs(secs))
}

/// Loggable form of a secret: first 10 and last 4 characters.
pub fn mask_secret(secret: &Secret<String>) -> String {
    let chars: Vec<char> = secret.expose_secret().chars().collect();
    if chars.len() <= 14 {
        return "*".repeat(chars.len().min(8));
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
