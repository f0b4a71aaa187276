use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tutor_core::ChatMessage;

use crate::provider::{Completion, CompletionProvider, LLMError, Result, TokenUsage};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    /// An empty key is accepted here; every call then fails with [`LLMError::Auth`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Build a non-streaming chat completions request body.
///
/// `temperature` is only present when set so the API applies its own default.
pub fn build_chat_body(
    model: &str,
    messages: &[ChatMessage],
    max_tokens: Option<u32>,
    temperature: Option<f32>,
) -> Value {
    let mut body = json!({
        "model": model,
        "messages": messages,
    });

    if let Some(max_tokens) = max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }

    if let Some(temperature) = temperature {
        body["temperature"] = json!(temperature);
    }

    body
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn parse_chat_response(data: &str) -> Result<Completion> {
    let response: ChatCompletionResponse = serde_json::from_str(data)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LLMError::EmptyResponse)?;
    let text = choice.message.content.ok_or(LLMError::EmptyResponse)?;

    Ok(Completion {
        text,
        model: response.model,
        finish_reason: choice.finish_reason,
        usage: response.usage,
    })
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        max_tokens: Option<u32>,
        temperature: Option<f32>,
        model: Option<&str>,
    ) -> Result<Completion> {
        if !self.has_api_key() {
            return Err(LLMError::Auth("OPENAI_API_KEY is not set".to_string()));
        }

        // Use provided model or fall back to default
        let model_to_use = model.unwrap_or(&self.model);

        if model.is_some() {
            log::debug!(
                "OpenAI provider using override model '{}' (default: '{}')",
                model_to_use,
                self.model
            );
        }

        let body = build_chat_body(model_to_use, messages, max_tokens, temperature);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(LLMError::Api(format!("HTTP {}: {}", status, text)));
        }

        let data = response.text().await?;
        let completion = parse_chat_response(&data)?;

        if let Some(usage) = &completion.usage {
            log::debug!(
                "OpenAI usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_provider() {
        let provider = OpenAIProvider::new("test_key");
        assert_eq!(provider.api_key, "test_key");
        assert_eq!(provider.base_url, "https://api.openai.com/v1");
        assert_eq!(provider.model, "gpt-4");
        assert!(provider.has_api_key());
    }

    #[test]
    fn test_chained_builders() {
        let provider = OpenAIProvider::new("test_key")
            .with_base_url("https://custom.openai.com/v1/")
            .with_model("gpt-4o");

        assert_eq!(provider.base_url, "https://custom.openai.com/v1");
        assert_eq!(provider.model(), "gpt-4o");
    }

    #[test]
    fn test_blank_key_is_not_a_key() {
        assert!(!OpenAIProvider::new("").has_api_key());
        assert!(!OpenAIProvider::new("   ").has_api_key());
    }

    #[test]
    fn test_request_body_without_temperature() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("Hello")];
        let body = build_chat_body("gpt-4", &messages, Some(800), None);

        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["max_tokens"], 800);
        assert!(body.get("temperature").is_none());
        assert!(body.get("stream").is_none());
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_request_body_with_temperature() {
        let messages = vec![ChatMessage::user("Hello")];
        let body = build_chat_body("gpt-4", &messages, Some(700), Some(0.5));

        assert_eq!(body["temperature"], 0.5);
    }

    #[test]
    fn test_parse_response_with_metadata() {
        let data = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-4-0613",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "  Hi there.  "},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12}
        }"#;

        let completion = parse_chat_response(data).unwrap();
        assert_eq!(completion.text, "  Hi there.  ");
        assert_eq!(completion.model.as_deref(), Some("gpt-4-0613"));
        assert_eq!(completion.finish_reason.as_deref(), Some("stop"));
        assert_eq!(completion.usage.unwrap().total_tokens, 12);
    }

    #[test]
    fn test_parse_response_without_choices() {
        let result = parse_chat_response(r#"{"choices": []}"#);
        assert!(matches!(result, Err(LLMError::EmptyResponse)));
    }

    #[test]
    fn test_parse_response_with_null_content() {
        let data = r#"{"choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "length"}]}"#;
        assert!(matches!(parse_chat_response(data), Err(LLMError::EmptyResponse)));
    }

    #[test]
    fn test_parse_malformed_response() {
        assert!(matches!(parse_chat_response("not json"), Err(LLMError::Json(_))));
    }
}
