use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "change_prompt.html")]
pub struct ChangePromptTemplate {
    pub current_prompt: String,
}

#[derive(Template)]
#[template(path = "prompt_updated.html")]
pub struct PromptUpdatedTemplate {}

#[derive(Deserialize)]
pub struct ChangePromptForm {
    #[serde(default)]
    pub new_prompt: Option<String>,
}

pub async fn change_prompt_page(State(state): State<AppState>) -> impl IntoResponse {
    ChangePromptTemplate {
        current_prompt: state.prompt_store.get().await.to_string(),
    }
}

/// Apply a non-empty `new_prompt`; anything else re-renders the form.
pub async fn change_prompt_handler(
    State(state): State<AppState>,
    form: Option<Form<ChangePromptForm>>,
) -> Response {
    let new_prompt = form.and_then(|Form(f)| f.new_prompt).unwrap_or_default();

    if state.prompt_store.set(&new_prompt).await {
        tracing::info!(prompt_len = new_prompt.len(), "System prompt updated");
        return PromptUpdatedTemplate {}.into_response();
    }

    change_prompt_page(State(state)).await.into_response()
}
