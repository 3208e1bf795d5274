pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

use config::{Backend, ErrorStatusPolicy};
use services::providers::TextProvider;
use services::{PromptProfile, PromptStore};
use std::sync::Arc;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
    pub profile: PromptProfile,
    pub prompt_store: PromptStore,
    pub provider: Arc<dyn TextProvider>,
    pub error_status: ErrorStatusPolicy,
}

impl AppState {
    /// State with the prompt store seeded from the backend's default prompt.
    pub fn new(
        backend: Backend,
        provider: Arc<dyn TextProvider>,
        error_status: ErrorStatusPolicy,
    ) -> Self {
        let profile = backend.prompt_profile();
        Self {
            backend,
            profile,
            prompt_store: PromptStore::new(profile.default_system_prompt()),
            provider,
            error_status,
        }
    }
}
