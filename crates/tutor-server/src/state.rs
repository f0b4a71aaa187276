use std::sync::Arc;

use tutor_llm::{CompletionPipeline, CompletionProvider, OpenAIProvider};

use crate::config::LlmConfig;

pub struct AppState {
    pub pipeline: CompletionPipeline,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            pipeline: CompletionPipeline::new(provider),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(build_provider(config))
    }
}

/// A missing key is logged, not fatal: requests fail with an auth error instead.
pub fn build_provider(config: &LlmConfig) -> Arc<dyn CompletionProvider> {
    let api_key = match config.api_key() {
        Some(key) => key.to_string(),
        None => {
            log::warn!("OPENAI_API_KEY is not set; generation requests will fail until it is configured");
            String::new()
        }
    };

    log::info!(
        "Creating OpenAI provider with base URL: {} and model: {}",
        config.base_url,
        config.model
    );

    Arc::new(
        OpenAIProvider::new(api_key)
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone()),
    )
}
