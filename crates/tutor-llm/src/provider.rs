use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tutor_core::ChatMessage;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Provider returned no completion text")]
    EmptyResponse,
}

impl LLMError {
    /// Message as reported by the provider or transport, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            LLMError::Api(message) | LLMError::Auth(message) => message.clone(),
            LLMError::Http(err) => err.to_string(),
            LLMError::Json(err) => err.to_string(),
            LLMError::EmptyResponse => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LLMError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Generated text plus whatever metadata the provider reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    pub text: String,
    pub model: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl Completion {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Non-streaming chat completion
    ///
    /// # Arguments
    /// * `messages` - Ordered chat messages
    /// * `max_tokens` - Maximum output tokens
    /// * `temperature` - Sampling temperature. If None, the provider default applies
    /// * `model` - Optional model override. If None, uses the provider's default model
    async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        max_tokens: Option<u32>,
        temperature: Option<f32>,
        model: Option<&str>,
    ) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_drops_variant_prefix() {
        let err = LLMError::Api("HTTP 429: slow down".to_string());
        assert_eq!(err.to_string(), "API error: HTTP 429: slow down");
        assert_eq!(err.message(), "HTTP 429: slow down");
        assert_eq!(LLMError::Auth("no key".to_string()).message(), "no key");
        assert_eq!(
            LLMError::EmptyResponse.message(),
            "Provider returned no completion text"
        );
    }
}
