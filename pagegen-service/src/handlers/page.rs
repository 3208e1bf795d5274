use crate::services::metrics::record_generation;
use crate::services::providers::ProviderError;
use crate::services::{page_topic, sanitize_html};
use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Response},
};
use std::time::Instant;

#[derive(Template)]
#[template(path = "generation_error.html")]
pub struct GenerationErrorTemplate {
    pub heading: String,
    pub detail: String,
}

impl GenerationErrorTemplate {
    fn new(provider: &str, error: &ProviderError) -> Self {
        match error {
            ProviderError::Upstream { status, .. } => Self {
                heading: "API request failed".to_string(),
                detail: format!("Status code: {}", status),
            },
            other => Self {
                heading: format!("Could not connect to the {} API", provider),
                detail: other.to_string(),
            },
        }
    }
}

/// Request path without its leading `/`, percent-decoded. Invalid UTF-8 is
/// replaced rather than rejected.
fn request_path(uri: &Uri) -> String {
    let raw = uri.path().strip_prefix('/').unwrap_or(uri.path());
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

/// Catch-all: generate a page for whatever path was requested.
pub async fn generate_page(State(state): State<AppState>, uri: Uri) -> Response {
    let path = request_path(&uri);
    let topic = page_topic(&path);
    let system_prompt = state.prompt_store.get().await;
    let prompt = state.profile.compose(&system_prompt, &topic);

    tracing::info!(
        path = %format!("/{}", path),
        topic = %topic,
        backend = %state.backend,
        prompt_len = prompt.len(),
        "Generating page"
    );

    let start = Instant::now();
    let result = state.provider.generate(&prompt).await;
    let elapsed = start.elapsed();

    match result {
        Ok(response) => {
            let html = sanitize_html(&response.text);
            record_generation(state.backend.as_str(), "success", elapsed);
            tracing::info!(
                topic = %topic,
                elapsed_ms = elapsed.as_millis() as u64,
                input_tokens = ?response.input_tokens,
                output_tokens = ?response.output_tokens,
                html_len = html.len(),
                "Page generated"
            );
            Html(html).into_response()
        }
        Err(e) => {
            record_generation(state.backend.as_str(), "error", elapsed);
            tracing::error!(
                topic = %topic,
                provider = state.provider.name(),
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "Page generation failed"
            );
            let status = state.error_status.status_for(e.upstream_status());
            (status, GenerationErrorTemplate::new(state.provider.name(), &e)).into_response()
        }
    }
}
